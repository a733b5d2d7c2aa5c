//! Parsing utilities for the text layouts
//!
//! Header and triplet records are line based. Row groups are read as a
//! whitespace token stream so pairs may wrap across lines.

use crate::format::constants::{HEADER_FIELDS, TRIPLET_FIELDS};
use crate::{Dimensions, FormatErrorKind, RowHeader, Triplet};
use core::str::SplitAsciiWhitespace;

/// Parse a `<rows> <cols>` header line
///
/// The line must hold exactly two non-negative integers.
pub fn parse_dimensions(line: &str) -> Result<Dimensions, FormatErrorKind> {
    let mut fields = [""; HEADER_FIELDS];
    split_exact(line, &mut fields).ok_or(FormatErrorKind::InvalidHeader)?;

    let rows = fields[0]
        .parse()
        .map_err(|_| FormatErrorKind::InvalidHeader)?;
    let cols = fields[1]
        .parse()
        .map_err(|_| FormatErrorKind::InvalidHeader)?;

    Ok(Dimensions::new(rows, cols))
}

/// Parse a `<row> <col> <value>` record line
pub fn parse_triplet(line: &str) -> Result<Triplet, FormatErrorKind> {
    let mut fields = [""; TRIPLET_FIELDS];
    split_exact(line, &mut fields).ok_or(FormatErrorKind::CorruptedRecord)?;

    Ok(Triplet::new(
        parse_index(fields[0])?,
        parse_index(fields[1])?,
        parse_value(fields[2])?,
    ))
}

/// Parse the `<row> <count>` opening of a row group from two tokens
pub fn parse_row_header(row: &str, count: &str) -> Result<RowHeader, FormatErrorKind> {
    Ok(RowHeader {
        row: parse_index(row)?,
        count: parse_index(count)?,
    })
}

/// Parse a row or column index
pub fn parse_index(token: &str) -> Result<usize, FormatErrorKind> {
    token.parse().map_err(|_| FormatErrorKind::CorruptedRecord)
}

/// Parse a stored value
pub fn parse_value(token: &str) -> Result<f64, FormatErrorKind> {
    token.parse().map_err(|_| FormatErrorKind::CorruptedRecord)
}

/// Fill `fields` with the whitespace separated words of `line`
///
/// Returns `None` unless the line holds exactly `fields.len()` words.
fn split_exact<'a>(line: &'a str, fields: &mut [&'a str]) -> Option<()> {
    let mut words = line.split_ascii_whitespace();
    for field in fields.iter_mut() {
        *field = words.next()?;
    }
    match words.next() {
        Some(_) => None,
        None => Some(()),
    }
}

/// A whitespace separated word and the 1-based line it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub line: usize,
    pub text: &'a str,
}

/// Token stream over numbered lines
///
/// The caller supplies `(line_number, line)` pairs, which lets it skip the
/// header and keep accurate line numbers for error reports.
pub struct Tokens<'a, I> {
    lines: I,
    current: Option<(usize, SplitAsciiWhitespace<'a>)>,
}

impl<'a, I> Tokens<'a, I>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            current: None,
        }
    }
}

impl<'a, I> Iterator for Tokens<'a, I>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((line, words)) = self.current.as_mut() {
                if let Some(text) = words.next() {
                    return Some(Token { line: *line, text });
                }
            }
            let (line, text) = self.lines.next()?;
            self.current = Some((line, text.split_ascii_whitespace()));
        }
    }
}
