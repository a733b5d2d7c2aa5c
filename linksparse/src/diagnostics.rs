//! Structural checks, fill statistics and debug dumps
//!
//! Nothing in this module mutates a matrix or panics on a broken one;
//! [`LinkedMatrix::check`] is the supported way to validate the chain
//! invariants in production.

use crate::error::Axis;
use crate::linked::{Chain, LinkedMatrix};
use linksparse_core::{density_percent, Dimensions};
use std::io::Write;
use tracing::{debug, error};

/// A broken chain invariant
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Violation {
    /// An item sits in a chain whose fixed index it does not share
    ForeignItem {
        axis: ChainAxis,
        chain: usize,
        /// The item's own row (for row chains) or column (for column chains)
        found: usize,
    },
    /// Indices along a chain are not strictly increasing
    Unordered {
        axis: ChainAxis,
        chain: usize,
        previous: usize,
        next: usize,
    },
    /// Row and column traversals disagree on the item count
    CountMismatch {
        via_rows: usize,
        via_cols: usize,
        stored: usize,
    },
}

/// Serializable mirror of [`Axis`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChainAxis {
    Row,
    Col,
}

impl From<Axis> for ChainAxis {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Row => ChainAxis::Row,
            Axis::Col => ChainAxis::Col,
        }
    }
}

/// Outcome of [`LinkedMatrix::check`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckReport {
    /// Items reached by walking every row chain
    pub via_rows: usize,
    /// Items reached by walking every column chain
    pub via_cols: usize,
    pub violations: Vec<Violation>,
}

impl CheckReport {
    /// Whether every invariant holds
    pub fn is_consistent(&self) -> bool {
        self.violations.is_empty()
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Fill statistics
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub dimensions: Dimensions,
    pub items: usize,
    /// `100 * items / (rows * cols)`
    pub density: f64,
}

impl Stats {
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "sparse stats:")?;
        writeln!(
            f,
            "\tsize: {}x{}, nb items: {}",
            self.dimensions.rows, self.dimensions.cols, self.items
        )?;
        write!(f, "\tdensity: {:.6}", self.density)
    }
}

impl LinkedMatrix {
    /// Walk every column chain and every row chain and report what is broken
    pub fn check(&self) -> CheckReport {
        let mut violations = Vec::new();

        let via_cols: usize = (0..self.cols())
            .map(|col| walk_chain(self.col_chain(col), col, &mut violations))
            .sum();
        let via_rows: usize = (0..self.rows())
            .map(|row| walk_chain(self.row_chain(row), row, &mut violations))
            .sum();

        if via_rows != via_cols || via_rows != self.nnz() {
            violations.push(Violation::CountMismatch {
                via_rows,
                via_cols,
                stored: self.nnz(),
            });
        }

        let report = CheckReport {
            via_rows,
            via_cols,
            violations,
        };
        if report.is_consistent() {
            debug!(items = via_rows, "linked matrix check ok");
        } else {
            error!(
                via_rows,
                via_cols,
                violations = report.violations.len(),
                "linked matrix is inconsistent"
            );
        }
        report
    }

    /// Shape, item count and fill density
    pub fn stats(&self) -> Stats {
        Stats {
            dimensions: self.dimensions(),
            items: self.nnz(),
            density: density_percent(self.nnz(), self.dimensions()),
        }
    }

    /// Write every stored value above `tolerance`, one per line, row-major
    pub fn dump_nonzeros<W: Write>(&self, out: &mut W, tolerance: f64) -> std::io::Result<()> {
        for (_, _, value) in self.entries() {
            if value.abs() > tolerance {
                writeln!(out, "{value:.6}")?;
            }
        }
        Ok(())
    }

    /// Write the dense expansion as a Scilab matrix literal, `[a,b;c,d]`
    pub fn dump_scilab<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "[")?;
        for row in 0..self.rows() {
            if row > 0 {
                write!(out, ";")?;
            }
            let dense = self.extract_row(row);
            for (col, value) in dense.iter().enumerate() {
                if col > 0 {
                    write!(out, ",")?;
                }
                write!(out, "{value:.6}")?;
            }
        }
        writeln!(out, "]")
    }
}

/// Count a chain's items, recording foreign items and ordering breaks
fn walk_chain(chain: Chain<'_>, index: usize, violations: &mut Vec<Violation>) -> usize {
    let axis = chain.axis();
    let mut count = 0;
    let mut previous: Option<usize> = None;

    for item in chain {
        count += 1;
        let (fixed, moving) = match axis {
            Axis::Row => (item.row(), item.col()),
            Axis::Col => (item.col(), item.row()),
        };

        if fixed != index {
            violations.push(Violation::ForeignItem {
                axis: axis.into(),
                chain: index,
                found: fixed,
            });
        }
        if let Some(prev) = previous {
            if prev >= moving {
                violations.push(Violation::Unordered {
                    axis: axis.into(),
                    chain: index,
                    previous: prev,
                    next: moving,
                });
            }
        }
        previous = Some(moving);
    }
    count
}
