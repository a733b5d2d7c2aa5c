//! Writing linked matrices as text

use crate::config::MatrixConfig;
use crate::linked::LinkedMatrix;
use linksparse_core::TextFormat;
use std::io::{self, Write};

/// Write `matrix` in `format`
///
/// Row-grouped output walks every row chain twice: once to count, once to
/// emit. Empty rows are skipped, never written with a zero count.
pub(crate) fn write_text<W: Write>(
    matrix: &LinkedMatrix,
    out: &mut W,
    format: TextFormat,
    config: &MatrixConfig,
) -> io::Result<()> {
    let offset = config.row_offset;
    writeln!(out, "{} {}", matrix.rows() + offset, matrix.cols())?;

    match format {
        TextFormat::Triplet => {
            for (row, col, value) in matrix.entries() {
                write!(out, "{} {} ", row + offset, col)?;
                write_value(out, value, config.value_precision)?;
                writeln!(out)?;
            }
        }
        TextFormat::RowGrouped => {
            for row in 0..matrix.rows() {
                let count = matrix.row_len(row);
                if count == 0 {
                    continue;
                }
                writeln!(out, "{} {}", row + offset, count)?;
                for (i, (col, value)) in matrix.row_entries(row).enumerate() {
                    if i > 0 {
                        write!(out, " ")?;
                    }
                    write!(out, "{col} ")?;
                    write_value(out, value, config.value_precision)?;
                }
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

/// Write `<rows> <cols>` then `<row> <sum>` for every non-empty row
pub(crate) fn write_row_sums<W: Write>(matrix: &LinkedMatrix, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} {}", matrix.rows(), matrix.cols())?;
    for row in 0..matrix.rows() {
        let mut chain = matrix.row_chain(row).peekable();
        if chain.peek().is_none() {
            continue;
        }
        let sum: f64 = chain.map(|item| item.value()).sum();
        writeln!(out, "{row} {sum}")?;
    }
    Ok(())
}

fn write_value<W: Write>(out: &mut W, value: f64, precision: Option<usize>) -> io::Result<()> {
    match precision {
        Some(decimals) => write!(out, "{value:.decimals$}"),
        None => write!(out, "{value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linked::ColumnLinkMode;

    fn sample() -> LinkedMatrix {
        let mut m = LinkedMatrix::new(3, 4, ColumnLinkMode::General);
        m.set(2, 3, 0.25, None);
        m.set(0, 1, 1.5, None);
        m.set(0, 0, -2.0, None);
        m
    }

    fn render(format: TextFormat, config: &MatrixConfig) -> String {
        let mut out = Vec::new();
        write_text(&sample(), &mut out, format, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_row_grouped_layout() {
        assert_eq!(
            render(TextFormat::RowGrouped, &MatrixConfig::default()),
            "3 4\n0 2\n0 -2 1 1.5\n2 1\n3 0.25\n"
        );
    }

    #[test]
    fn test_triplet_layout() {
        assert_eq!(
            render(TextFormat::Triplet, &MatrixConfig::default()),
            "3 4\n0 0 -2\n0 1 1.5\n2 3 0.25\n"
        );
    }

    #[test]
    fn test_row_offset_and_precision() {
        let config = MatrixConfig::default()
            .with_row_offset(10)
            .with_value_precision(3);
        assert_eq!(
            render(TextFormat::RowGrouped, &config),
            "13 4\n10 2\n0 -2.000 1 1.500\n12 1\n3 0.250\n"
        );
    }

    #[test]
    fn test_row_sums() {
        let mut out = Vec::new();
        write_row_sums(&sample(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3 4\n0 -0.5\n2 0.25\n");
    }
}
