//! Configuration shared by construction, conversion and file I/O

use crate::linked::ColumnLinkMode;
use linksparse_core::format::constants::ZERO_TOLERANCE;

/// Configuration for building, loading and writing linked matrices
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    /// Column-chain maintenance mode for matrices built with this config
    pub link_mode: ColumnLinkMode,
    /// Dense entries with absolute value at or below this are not stored
    pub tolerance: f64,
    /// Fixed number of decimals for written values, `None` for the
    /// shortest representation that reads back to the same `f64`
    pub value_precision: Option<usize>,
    /// Added to every row id (and the declared row count) when writing
    pub row_offset: usize,
}

impl MatrixConfig {
    /// Config for data known to arrive in row-major order
    pub fn append_only() -> Self {
        Self::default().with_link_mode(ColumnLinkMode::AppendOnly)
    }

    /// Set the column link mode
    pub fn with_link_mode(mut self, link_mode: ColumnLinkMode) -> Self {
        self.link_mode = link_mode;
        self
    }

    /// Set the zero tolerance used when sparsifying dense data
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Write values with a fixed number of decimals
    pub fn with_value_precision(mut self, decimals: usize) -> Self {
        self.value_precision = Some(decimals);
        self
    }

    /// Shift written row ids by `offset`
    pub fn with_row_offset(mut self, offset: usize) -> Self {
        self.row_offset = offset;
        self
    }

    /// Whether a dense value is large enough to be stored
    pub fn is_significant(&self, value: f64) -> bool {
        value.abs() > self.tolerance
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            link_mode: ColumnLinkMode::General,
            tolerance: ZERO_TOLERANCE,
            value_precision: None,
            row_offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = MatrixConfig::append_only()
            .with_tolerance(1e-3)
            .with_value_precision(6)
            .with_row_offset(10);

        assert_eq!(config.link_mode, ColumnLinkMode::AppendOnly);
        assert_eq!(config.tolerance, 1e-3);
        assert_eq!(config.value_precision, Some(6));
        assert_eq!(config.row_offset, 10);
    }

    #[test]
    fn test_is_significant() {
        let config = MatrixConfig::default();
        assert!(config.is_significant(1e-3));
        assert!(config.is_significant(-1e-3));
        assert!(!config.is_significant(1e-6));
        assert!(!config.is_significant(0.0));
    }
}
