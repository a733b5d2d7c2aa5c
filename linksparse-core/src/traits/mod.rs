//! Abstract interfaces for linked sparse matrices
//!
//! Traits are pure interfaces - no concrete implementations.

pub mod matrix;

pub use matrix::SparseMatrix;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
