//! Dense conversion endpoints
//!
//! [`DenseMatrix`] is a plain row-major `f64` container. It exists only so
//! linked matrices can be built from, and expanded into, dense data.

use crate::config::MatrixConfig;
use crate::linked::LinkedMatrix;
use linksparse_core::{Dimensions, MatrixOperations};

/// Row-major dense matrix
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Create a zero-filled matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Wrap row-major data
    ///
    /// Returns `None` if `data.len() != rows * cols`.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        if rows.checked_mul(cols)? != data.len() {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    /// Expand any sparse matrix row by row
    pub fn from_sparse<M: MatrixOperations>(matrix: &M) -> Self {
        let Dimensions { rows, cols } = matrix.dimensions();
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            data.extend(matrix.get_row(row));
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// The underlying row-major storage
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl LinkedMatrix {
    /// Build a linked matrix from every significant dense entry
    ///
    /// Entries whose absolute value does not exceed `config.tolerance` are
    /// skipped. The dense scan is row-major, so append-only mode is safe.
    pub fn sparsify(dense: &DenseMatrix, config: &MatrixConfig) -> Self {
        let mut sparse = LinkedMatrix::with_config(dense.rows, dense.cols, config);
        for row in 0..dense.rows {
            let mut hint = None;
            for (col, &value) in dense.row(row).iter().enumerate() {
                if config.is_significant(value) {
                    hint = Some(sparse.set(row, col, value, hint));
                }
            }
        }
        sparse
    }

    /// Expand into a dense matrix
    pub fn to_dense(&self) -> DenseMatrix {
        DenseMatrix::from_sparse(self)
    }

    /// A row as a zero-filled vector of length `cols`
    pub fn extract_row(&self, row: usize) -> Vec<f64> {
        let mut out = vec![0.0; self.cols()];
        for (col, value) in self.row_entries(row) {
            out[col] = value;
        }
        out
    }

    /// A column as a zero-filled vector of length `rows`
    pub fn extract_col(&self, col: usize) -> Vec<f64> {
        let mut out = vec![0.0; self.rows()];
        for (row, value) in self.col_entries(col) {
            out[row] = value;
        }
        out
    }
}
