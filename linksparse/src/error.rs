//! Error types for linked sparse matrix operations
//!
//! File and format failures carry the path and line that caused them.
//! Contract violations carry the offending indices. Duplicate positions are
//! not errors: they are merged by addition.

use linksparse_core::{Dimensions, FormatErrorKind};
use std::path::{Path, PathBuf};

/// Which index array a resize touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "column"),
        }
    }
}

/// Primary error type for linksparse operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be opened, read or written
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dimension header or a record is malformed
    #[error("{}:{line}: {kind}", .path.display())]
    Format {
        path: PathBuf,
        /// 1-based line number of the offending text
        line: usize,
        kind: FormatErrorKind,
    },

    /// A well-formed record could not be stored; the cause is in `source()`
    #[error("{}:{line}: record rejected", .path.display())]
    Record {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<Error>,
    },

    /// An imported file declares a different shape than the target matrix
    #[error(
        "{}: cannot import a {}x{} matrix into a {}x{} matrix",
        .path.display(), .found.rows, .found.cols, .expected.rows, .expected.cols
    )]
    DimensionMismatch {
        path: PathBuf,
        expected: Dimensions,
        found: Dimensions,
    },

    /// A position lies outside the matrix
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// An append-only matrix received an entry at or above its column tail
    #[error("append-only insertion of ({row}, {col}) after row {tail_row} in that column")]
    OutOfOrderAppend {
        row: usize,
        col: usize,
        tail_row: usize,
    },

    /// A shrinking resize would drop stored items
    #[error("resize would discard items in {axis} {index}")]
    ShrinkDiscardsItems { axis: Axis, index: usize },
}

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn format(path: &Path, line: usize, kind: FormatErrorKind) -> Self {
        Error::Format {
            path: path.to_path_buf(),
            line,
            kind,
        }
    }

    pub(crate) fn record(path: &Path, line: usize, source: Error) -> Self {
        Error::Record {
            path: path.to_path_buf(),
            line,
            source: Box::new(source),
        }
    }
}

/// Result type for linksparse operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_record_cause_reported_once() {
        let err = Error::record(
            Path::new("m.ijk"),
            3,
            Error::IndexOutOfBounds {
                row: 5,
                col: 0,
                rows: 2,
                cols: 2,
            },
        );

        assert_eq!(err.to_string(), "m.ijk:3: record rejected");
        let cause = err.source().map(|e| e.to_string());
        assert_eq!(
            cause.as_deref(),
            Some("index (5, 0) out of bounds for 2x2 matrix")
        );
    }
}
