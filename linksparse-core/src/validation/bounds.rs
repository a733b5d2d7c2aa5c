//! Bounds and density arithmetic
//!
//! This module provides pure mathematical helpers used by matrix
//! implementations and diagnostics.

use crate::Dimensions;

/// Check that a position lies inside the declared shape
///
/// Returns the offending `(row, col)` back on failure so callers can build
/// their own error with full context.
pub const fn check_position(
    dims: Dimensions,
    row: usize,
    col: usize,
) -> Result<(), (usize, usize)> {
    if dims.contains(row, col) {
        Ok(())
    } else {
        Err((row, col))
    }
}

/// Fill density in percent, `100 * items / (rows * cols)`
///
/// An empty shape has density 0 rather than NaN.
pub fn density_percent(items: usize, dims: Dimensions) -> f64 {
    if dims.is_empty() {
        return 0.0;
    }
    100.0 * items as f64 / (dims.rows as f64 * dims.cols as f64)
}
