//! Text file I/O for linked matrices
//!
//! This module reads and writes the triplet and row-grouped layouts, and
//! merges files into existing matrices.
//!
//! Loading a file in [`ColumnLinkMode::AppendOnly`](crate::ColumnLinkMode)
//! requires the file to be row-major sorted. Row-grouped files written by
//! this crate always are; unsorted input is reported as an
//! [`Error::Record`] wrapping [`Error::OutOfOrderAppend`].

mod reader;
mod source;
mod writer;

use crate::config::MatrixConfig;
use crate::error::{Error, Result};
use crate::linked::LinkedMatrix;
use linksparse_core::{Dimensions, TextFormat};
use source::TextSource;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Label used in errors for in-memory readers and writers
const STREAM_LABEL: &str = "<stream>";

/// Handle for a matrix text file in a given layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixFile {
    pub path: PathBuf,
    pub format: TextFormat,
}

impl MatrixFile {
    pub fn new<P: AsRef<Path>>(path: P, format: TextFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format,
        }
    }

    /// Read only the dimension header
    pub fn dimensions(&self) -> Result<Dimensions> {
        let file = File::open(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let mut lines = Vec::new();
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| Error::io(&self.path, e))?;
            let blank = line.trim().is_empty();
            lines.push((i + 1, line));
            if !blank {
                break;
            }
        }
        reader::parse_header(
            &mut lines.iter().map(|(n, l)| (*n, l.as_str())),
            &self.path,
        )
    }

    /// Build a new matrix from the file
    pub fn read(&self, config: &MatrixConfig) -> Result<LinkedMatrix> {
        let source = TextSource::open(&self.path)?;
        reader::parse_matrix(source.as_str(&self.path)?, &self.path, self.format, config)
    }

    /// Merge the file's entries into `matrix`, which must have the same shape
    ///
    /// Positions already stored accumulate. Returns the number of records
    /// read (lines for triplets, row groups for the row-grouped layout).
    pub fn import_into(&self, matrix: &mut LinkedMatrix) -> Result<usize> {
        let source = TextSource::open(&self.path)?;
        reader::merge_into(matrix, source.as_str(&self.path)?, &self.path, self.format)
    }

    /// Write `matrix` to the file, replacing it
    pub fn write(&self, matrix: &LinkedMatrix, config: &MatrixConfig) -> Result<()> {
        info!(
            path = %self.path.display(),
            format = %self.format,
            items = matrix.nnz(),
            row_offset = config.row_offset,
            "writing sparse matrix"
        );
        let file = File::create(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let mut out = BufWriter::new(file);
        writer::write_text(matrix, &mut out, self.format, config)
            .and_then(|()| out.flush())
            .map_err(|e| Error::io(&self.path, e))
    }
}

/// Build a new matrix from the file at `path`
pub fn read_matrix<P: AsRef<Path>>(
    path: P,
    format: TextFormat,
    config: &MatrixConfig,
) -> Result<LinkedMatrix> {
    MatrixFile::new(path, format).read(config)
}

/// Merge the file at `path` into `matrix`
pub fn import_into<P: AsRef<Path>>(
    matrix: &mut LinkedMatrix,
    path: P,
    format: TextFormat,
) -> Result<usize> {
    MatrixFile::new(path, format).import_into(matrix)
}

/// Write `matrix` to `path`
pub fn write_matrix<P: AsRef<Path>>(
    matrix: &LinkedMatrix,
    path: P,
    format: TextFormat,
    config: &MatrixConfig,
) -> Result<()> {
    MatrixFile::new(path, format).write(matrix, config)
}

/// Write the sum of every non-empty row to `path`
///
/// The file starts with the `<rows> <cols>` header followed by one
/// `<row> <sum>` line per non-empty row.
pub fn write_row_sums<P: AsRef<Path>>(matrix: &LinkedMatrix, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    writer::write_row_sums(matrix, &mut out)
        .and_then(|()| out.flush())
        .map_err(|e| Error::io(path, e))
}

/// Build a new matrix from any reader
pub fn read_matrix_from<R: Read>(
    input: R,
    format: TextFormat,
    config: &MatrixConfig,
) -> Result<LinkedMatrix> {
    let label = Path::new(STREAM_LABEL);
    let source = TextSource::from_reader(input, label)?;
    reader::parse_matrix(source.as_str(label)?, label, format, config)
}

/// Merge entries from any reader into `matrix`
pub fn import_from<R: Read>(
    matrix: &mut LinkedMatrix,
    input: R,
    format: TextFormat,
) -> Result<usize> {
    let label = Path::new(STREAM_LABEL);
    let source = TextSource::from_reader(input, label)?;
    reader::merge_into(matrix, source.as_str(label)?, label, format)
}

/// Write `matrix` to any writer
pub fn write_matrix_to<W: Write>(
    matrix: &LinkedMatrix,
    mut out: W,
    format: TextFormat,
    config: &MatrixConfig,
) -> Result<()> {
    writer::write_text(matrix, &mut out, format, config)
        .map_err(|e| Error::io(Path::new(STREAM_LABEL), e))
}

/// Write row sums to any writer
pub fn write_row_sums_to<W: Write>(matrix: &LinkedMatrix, mut out: W) -> Result<()> {
    writer::write_row_sums(matrix, &mut out).map_err(|e| Error::io(Path::new(STREAM_LABEL), e))
}
