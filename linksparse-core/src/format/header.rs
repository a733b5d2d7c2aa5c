//! Dimension header and format selection

use super::constants::names;

/// Declared shape of a matrix, the first line of every text file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Dimensions {
    /// Create a new dimension header
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether `(row, col)` addresses a position inside this shape
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Total number of positions, `None` on overflow
    pub const fn positions(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Whether the shape has no positions at all
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

impl core::fmt::Display for Dimensions {
    /// Formats as the header line body, `<rows> <cols>`
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.rows, self.cols)
    }
}

/// On-disk text layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextFormat {
    /// Flat `<row> <col> <value>` records, one per line, any order
    Triplet,
    /// `<row> <count>` followed by `count` column/value pairs; rows ascending
    RowGrouped,
}

impl TextFormat {
    /// Look a format up by its short name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            names::TRIPLET => Some(TextFormat::Triplet),
            names::ROW_GROUPED => Some(TextFormat::RowGrouped),
            _ => None,
        }
    }

    /// Short name of the format
    pub const fn name(self) -> &'static str {
        match self {
            TextFormat::Triplet => names::TRIPLET,
            TextFormat::RowGrouped => names::ROW_GROUPED,
        }
    }

    /// Whether files in this layout are always row-major sorted
    pub const fn is_row_major(self) -> bool {
        matches!(self, TextFormat::RowGrouped)
    }
}

impl core::fmt::Display for TextFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_contains() {
        let dims = Dimensions::new(3, 4);
        assert!(dims.contains(0, 0));
        assert!(dims.contains(2, 3));
        assert!(!dims.contains(3, 0));
        assert!(!dims.contains(0, 4));
    }

    #[test]
    fn test_dimensions_positions() {
        assert_eq!(Dimensions::new(3, 4).positions(), Some(12));
        assert_eq!(Dimensions::new(usize::MAX, 2).positions(), None);
        assert!(Dimensions::new(0, 5).is_empty());
        assert!(!Dimensions::new(1, 1).is_empty());
        assert_eq!(Dimensions::from((4, 2)), Dimensions::new(4, 2));
    }

    #[test]
    fn test_text_format_names() {
        assert_eq!(TextFormat::from_name("ijk"), Some(TextFormat::Triplet));
        assert_eq!(TextFormat::from_name("rows"), Some(TextFormat::RowGrouped));
        assert_eq!(TextFormat::from_name("csr"), None);
        assert_eq!(TextFormat::RowGrouped.name(), "rows");
        assert!(TextFormat::RowGrouped.is_row_major());
        assert!(!TextFormat::Triplet.is_row_major());
    }
}
