//! Error kinds for text format parsing

/// Ways a text record can be malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// The `<rows> <cols>` header is missing or not two integers
    InvalidHeader,
    /// A record has the wrong number of fields or an unparsable field
    CorruptedRecord,
    /// Input ended in the middle of a row group
    TruncatedRecord,
}

impl core::fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FormatErrorKind::InvalidHeader => "invalid dimension header",
            FormatErrorKind::CorruptedRecord => "corrupted record",
            FormatErrorKind::TruncatedRecord => "truncated record",
        };
        write!(f, "{msg}")
    }
}

/// Result type for format parsing
pub type Result<T> = core::result::Result<T, FormatErrorKind>;
