//! linksparse - In-memory sparse matrices with linked row and column chains
//!
//! Every stored entry is reachable both from its row chain (ordered by
//! column) and from its column chain (ordered by row), so row sweeps and
//! column sweeps are equally cheap. Writing an already stored position adds
//! to it instead of replacing it.
//!
//! ## Architecture
//!
//! - **linksparse-core**: Text layouts, record parsing and traits (no I/O)
//! - **linksparse**: The linked engine, Gram products, diagnostics and file I/O
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use linksparse::{MatrixConfig, MatrixFile, TextFormat};
//!
//! fn example() -> linksparse::Result<()> {
//!     // Row-grouped files are row-major, so append-only linking is safe
//!     let config = MatrixConfig::append_only();
//!     let file = MatrixFile::new("matrix.rows", TextFormat::RowGrouped);
//!     let matrix = file.read(&config)?;
//!
//!     println!("{}", matrix.stats());
//!     let gram = matrix.gram();
//!     println!("mean diagonal: {}", matrix.mean_gram_diagonal());
//!
//!     MatrixFile::new("gram.ijk", TextFormat::Triplet).write(&gram, &MatrixConfig::default())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap** (default): Memory-map input files instead of reading them
//! - **serde** (default): Serialize check reports and statistics
//! - **cli**: Build the `sparse_tool` example

// Re-export core abstractions and format definitions
pub use linksparse_core::{
    // Core traits
    MatrixOperations, SparseMatrix,
    // Format definitions
    Dimensions, FormatErrorKind, RowHeader, TextFormat, Triplet,
};

pub mod config;
pub mod dense;
pub mod diagnostics;
pub mod error;
pub mod gram;
pub mod io;
pub mod linked;

pub use config::MatrixConfig;
pub use dense::DenseMatrix;
pub use diagnostics::{ChainAxis, CheckReport, Stats, Violation};
pub use error::{Axis, Error, Result};
pub use io::{
    import_from, import_into, read_matrix, read_matrix_from, write_matrix, write_matrix_to,
    write_row_sums, write_row_sums_to, MatrixFile,
};
pub use linked::{Chain, ColumnLinkMode, Item, ItemHandle, LinkedMatrix};
