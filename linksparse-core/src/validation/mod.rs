//! Record parsing and bounds utilities
//!
//! Pure functions over text and numbers with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{check_position, density_percent};
pub use parsing::{
    parse_dimensions, parse_index, parse_row_header, parse_triplet, parse_value, Token, Tokens,
};
