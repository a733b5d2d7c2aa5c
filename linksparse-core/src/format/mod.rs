//! Text format definitions for linked sparse matrix files
//!
//! This module contains the data structures describing the two plain-text
//! layouts. No I/O happens here.

pub mod constants;
pub mod header;
pub mod record;

pub use header::{Dimensions, TextFormat};
pub use record::{RowHeader, Triplet};
