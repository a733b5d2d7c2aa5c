//! Stored entries and the handles that link them

/// Position of an item in its matrix's item store
///
/// Handles are only meaningful for the matrix that returned them. They stay
/// valid for the life of that matrix since items are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemHandle(pub(crate) usize);

impl ItemHandle {
    /// Index of the item in the store
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One stored entry
///
/// Each item sits in two chains at once: its row chain, ordered by column,
/// and its column chain, ordered by row.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) value: f64,
    pub(crate) next_in_row: Option<ItemHandle>,
    pub(crate) next_in_col: Option<ItemHandle>,
}

impl Item {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Next item in the same row
    pub fn next_in_row(&self) -> Option<ItemHandle> {
        self.next_in_row
    }

    /// Next item in the same column
    pub fn next_in_col(&self) -> Option<ItemHandle> {
        self.next_in_col
    }
}

/// How new items are linked into their column chain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnLinkMode {
    /// Walk the column chain from its head and splice in order
    #[default]
    General,
    /// Entries arrive row-major; link at the column tail in O(1)
    ///
    /// Inserting a row at or above the current tail of its column is a
    /// contract violation.
    AppendOnly,
}

impl std::fmt::Display for ColumnLinkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnLinkMode::General => write!(f, "general"),
            ColumnLinkMode::AppendOnly => write!(f, "append-only"),
        }
    }
}
