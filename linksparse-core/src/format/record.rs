//! Record types appearing after the dimension header

/// One stored entry as written in the triplet layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triplet {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

impl Triplet {
    pub const fn new(row: usize, col: usize, value: f64) -> Self {
        Self { row, col, value }
    }
}

/// Opening line of a row group: which row, and how many pairs follow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHeader {
    pub row: usize,
    pub count: usize,
}
