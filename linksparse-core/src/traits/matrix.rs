//! Core matrix abstraction traits
//!
//! This module defines the traits sparse matrix implementations satisfy so
//! that conversions and diagnostics can be written once.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::Dimensions;

/// Core sparse matrix trait for format-agnostic access
///
/// Every value is an `f64`; positions without a stored entry read as zero.
pub trait SparseMatrix {
    /// Get the stored value at a position
    ///
    /// Returns `None` if nothing is stored there or the position is out of
    /// bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<f64>;

    /// Get matrix dimensions
    fn dimensions(&self) -> Dimensions;

    /// Get number of stored entries
    fn nnz(&self) -> usize;

    /// Get the value at a position, zero when nothing is stored
    fn value_or_zero(&self, row: usize, col: usize) -> f64 {
        self.get_element(row, col).unwrap_or(0.0)
    }
}

/// Extension trait for dense row/column extraction (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseMatrix {
    /// Get a row as a zero-filled dense vector of length `cols`
    fn get_row(&self, row_index: usize) -> Vec<f64>;

    /// Get a column as a zero-filled dense vector of length `rows`
    fn get_col(&self, col_index: usize) -> Vec<f64>;
}
