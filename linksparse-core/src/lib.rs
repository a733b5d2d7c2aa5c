#![no_std]

//! linksparse core - text format definitions for linked sparse matrices
//!
//! This crate provides the on-disk layouts, record parsing and the
//! format-agnostic traits shared by every linksparse implementation.
//! Nothing in here performs I/O.

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::*;
