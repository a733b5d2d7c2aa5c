//! Format constants shared by readers and writers

/// Absolute value below which a dense entry is treated as zero
pub const ZERO_TOLERANCE: f64 = 1.0e-6;

/// Number of fields in a dimension header line
pub const HEADER_FIELDS: usize = 2;

/// Number of fields in a triplet record line
pub const TRIPLET_FIELDS: usize = 3;

/// Format names as accepted on the command line
pub mod names {
    /// One `<row> <col> <value>` record per line
    pub const TRIPLET: &str = "ijk";

    /// A `<row> <count>` line followed by column/value pairs
    pub const ROW_GROUPED: &str = "rows";
}
