//! Parsing text into linked matrices

use crate::config::MatrixConfig;
use crate::error::{Error, Result};
use crate::linked::LinkedMatrix;
use linksparse_core::{
    parse_dimensions, parse_index, parse_row_header, parse_triplet, parse_value, Dimensions,
    FormatErrorKind, TextFormat, Token, Tokens,
};
use std::path::Path;
use tracing::info;

/// `(line_number, line)` pairs, 1-based
fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().map(|(i, line)| (i + 1, line))
}

/// Consume lines up to and including the dimension header
pub(crate) fn parse_header<'a, I>(lines: &mut I, path: &Path) -> Result<Dimensions>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut last_line = 1;
    for (line, text) in lines.by_ref() {
        last_line = line;
        if text.trim().is_empty() {
            continue;
        }
        return parse_dimensions(text).map_err(|kind| Error::format(path, line, kind));
    }
    Err(Error::format(path, last_line, FormatErrorKind::InvalidHeader))
}

/// Build a new matrix from text in `format`
pub(crate) fn parse_matrix(
    text: &str,
    path: &Path,
    format: TextFormat,
    config: &MatrixConfig,
) -> Result<LinkedMatrix> {
    let mut lines = numbered_lines(text);
    let dims = parse_header(&mut lines, path)?;

    let mut matrix = LinkedMatrix::with_config(dims.rows, dims.cols, config);
    let records = load_records(&mut matrix, lines, path, format)?;

    info!(
        path = %path.display(),
        %format,
        rows = dims.rows,
        cols = dims.cols,
        records,
        items = matrix.nnz(),
        "read sparse matrix"
    );
    Ok(matrix)
}

/// Merge text in `format` into an existing matrix of the same shape
pub(crate) fn merge_into(
    matrix: &mut LinkedMatrix,
    text: &str,
    path: &Path,
    format: TextFormat,
) -> Result<usize> {
    let mut lines = numbered_lines(text);
    let found = parse_header(&mut lines, path)?;
    if found != matrix.dimensions() {
        return Err(Error::DimensionMismatch {
            path: path.to_path_buf(),
            expected: matrix.dimensions(),
            found,
        });
    }

    // Records go into a copy so a failing record leaves `matrix` untouched
    let before = matrix.nnz();
    let mut staged = matrix.clone();
    let records = load_records(&mut staged, lines, path, format)?;
    *matrix = staged;

    info!(
        path = %path.display(),
        %format,
        records,
        new_items = matrix.nnz() - before,
        "imported sparse matrix"
    );
    Ok(records)
}

/// Store every record after the header; returns the number of records
fn load_records<'a, I>(
    matrix: &mut LinkedMatrix,
    lines: I,
    path: &Path,
    format: TextFormat,
) -> Result<usize>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    match format {
        TextFormat::Triplet => load_triplets(matrix, lines, path),
        TextFormat::RowGrouped => load_row_groups(matrix, lines, path),
    }
}

fn load_triplets<'a, I>(matrix: &mut LinkedMatrix, lines: I, path: &Path) -> Result<usize>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut records = 0;
    let mut hint = None;

    for (line, text) in lines {
        if text.trim().is_empty() {
            continue;
        }
        let triplet = parse_triplet(text).map_err(|kind| Error::format(path, line, kind))?;
        let handle = matrix
            .try_set(triplet.row, triplet.col, triplet.value, hint)
            .map_err(|err| Error::record(path, line, err))?;
        hint = Some(handle);
        records += 1;
    }
    Ok(records)
}

/// Row groups are whitespace-token based; a group counts as one record
fn load_row_groups<'a, I>(matrix: &mut LinkedMatrix, lines: I, path: &Path) -> Result<usize>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut tokens = Tokens::new(lines);
    let mut records = 0;

    while let Some(row_token) = tokens.next() {
        let count_token = expect_token(&mut tokens, path, row_token.line)?;
        let header = parse_row_header(row_token.text, count_token.text)
            .map_err(|kind| Error::format(path, count_token.line, kind))?;
        if header.row >= matrix.rows() {
            let err = Error::IndexOutOfBounds {
                row: header.row,
                col: 0,
                rows: matrix.rows(),
                cols: matrix.cols(),
            };
            return Err(Error::record(path, count_token.line, err));
        }

        let mut hint = None;
        let mut line = count_token.line;
        for _ in 0..header.count {
            let col_token = expect_token(&mut tokens, path, line)?;
            let value_token = expect_token(&mut tokens, path, col_token.line)?;
            line = value_token.line;

            let col = parse_index(col_token.text)
                .map_err(|kind| Error::format(path, col_token.line, kind))?;
            let value = parse_value(value_token.text)
                .map_err(|kind| Error::format(path, line, kind))?;

            let handle = matrix
                .try_set(header.row, col, value, hint)
                .map_err(|err| Error::record(path, line, err))?;
            hint = Some(handle);
        }
        records += 1;
    }
    Ok(records)
}

fn expect_token<'a, I>(tokens: &mut Tokens<'a, I>, path: &Path, line: usize) -> Result<Token<'a>>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    tokens
        .next()
        .ok_or_else(|| Error::format(path, line, FormatErrorKind::TruncatedRecord))
}
