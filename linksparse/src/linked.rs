//! Sparse matrix with linked row and column chains
//!
//! Every stored entry lives once in a contiguous item store. Row chains
//! (ordered by column) and column chains (ordered by row) are threaded
//! through the store by handle, so both views share the same values.
//!
//! In [`ColumnLinkMode::AppendOnly`] the matrix also keeps the tail of every
//! column chain, turning column linking into an O(1) append. That mode is
//! only valid while entries arrive row-major.

mod chains;
mod item;

pub use chains::Chain;
pub use item::{ColumnLinkMode, Item, ItemHandle};

use crate::config::MatrixConfig;
use crate::error::{Axis, Error, Result};
use linksparse_core::{check_position, Dimensions, MatrixOperations, SparseMatrix};
use tracing::{debug, trace, warn};

/// Sparse `f64` matrix stored as per-row and per-column linked chains
#[derive(Debug, Clone)]
pub struct LinkedMatrix {
    rows: usize,
    cols: usize,
    items: Vec<Item>,
    row_heads: Vec<Option<ItemHandle>>,
    col_heads: Vec<Option<ItemHandle>>,
    /// Present only in append-only mode
    col_tails: Option<Vec<Option<ItemHandle>>>,
}

impl LinkedMatrix {
    /// Create an empty matrix
    pub fn new(rows: usize, cols: usize, link_mode: ColumnLinkMode) -> Self {
        let col_tails = match link_mode {
            ColumnLinkMode::General => None,
            ColumnLinkMode::AppendOnly => Some(vec![None; cols]),
        };

        Self {
            rows,
            cols,
            items: Vec::new(),
            row_heads: vec![None; rows],
            col_heads: vec![None; cols],
            col_tails,
        }
    }

    /// Create an empty matrix using the config's link mode
    pub fn with_config(rows: usize, cols: usize, config: &MatrixConfig) -> Self {
        Self::new(rows, cols, config.link_mode)
    }

    /// Get the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the shape as a [`Dimensions`] header
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.cols)
    }

    /// Get the number of stored items
    pub fn nnz(&self) -> usize {
        self.items.len()
    }

    /// Whether no items are stored
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn link_mode(&self) -> ColumnLinkMode {
        match self.col_tails {
            Some(_) => ColumnLinkMode::AppendOnly,
            None => ColumnLinkMode::General,
        }
    }

    /// Look up a stored item by handle
    ///
    /// # Panics
    ///
    /// Panics if the handle was not returned by this matrix.
    pub fn item(&self, handle: ItemHandle) -> &Item {
        &self.items[handle.index()]
    }

    /// Walk row `row` in column order
    pub fn row_chain(&self, row: usize) -> Chain<'_> {
        Chain::new(&self.items, self.row_heads[row], Axis::Row)
    }

    /// Walk column `col` in row order
    pub fn col_chain(&self, col: usize) -> Chain<'_> {
        Chain::new(&self.items, self.col_heads[col], Axis::Col)
    }

    /// `(col, value)` pairs of a row, columns ascending
    pub fn row_entries(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.row_chain(row).map(|item| (item.col, item.value))
    }

    /// `(row, value)` pairs of a column, rows ascending
    pub fn col_entries(&self, col: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.col_chain(col).map(|item| (item.row, item.value))
    }

    /// All `(row, col, value)` entries in row-major order
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.rows).flat_map(move |row| {
            self.row_chain(row)
                .map(|item| (item.row, item.col, item.value))
        })
    }

    /// Number of items in a row
    pub fn row_len(&self, row: usize) -> usize {
        self.row_chain(row).count()
    }

    /// Find the item stored at a position
    pub fn find(&self, row: usize, col: usize) -> Option<ItemHandle> {
        self.assert_in_bounds(row, col);
        match self.locate_in_row(row, col, None) {
            (_, Some(handle)) if self.items[handle.index()].col == col => Some(handle),
            _ => None,
        }
    }

    /// Whether a value is stored at a position
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.find(row, col).is_some()
    }

    /// Get the value at a position, zero when nothing is stored
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.find(row, col)
            .map_or(0.0, |handle| self.items[handle.index()].value)
    }

    /// Add `value` at a position and return the item holding it
    ///
    /// A position written for the first time gets a new item. Writing an
    /// existing position adds `value` to the stored one. `hint` may be any
    /// handle from an earlier call; it shortens the row walk when it lies in
    /// `row` at or before `col` and is ignored otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the matrix, or if an append-only
    /// matrix receives a row at or above the tail of its column. Use
    /// [`LinkedMatrix::try_set`] to get these as errors instead.
    pub fn set(
        &mut self,
        row: usize,
        col: usize,
        value: f64,
        hint: Option<ItemHandle>,
    ) -> ItemHandle {
        match self.try_set(row, col, value, hint) {
            Ok(handle) => handle,
            Err(err) => panic!("LinkedMatrix::set: {err}"),
        }
    }

    /// Checked form of [`LinkedMatrix::set`]
    ///
    /// On error the matrix is left unchanged.
    pub fn try_set(
        &mut self,
        row: usize,
        col: usize,
        value: f64,
        hint: Option<ItemHandle>,
    ) -> Result<ItemHandle> {
        check_position(self.dimensions(), row, col).map_err(|(row, col)| {
            Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }
        })?;

        let (prev, next) = self.locate_in_row(row, col, hint);

        if let Some(handle) = next {
            let item = &mut self.items[handle.index()];
            if item.col == col {
                warn!(
                    row,
                    col,
                    old = item.value,
                    added = value,
                    "duplicate position, values summed"
                );
                item.value += value;
                return Ok(handle);
            }
        }

        // Validate the column side before touching anything
        let col_prev = self.column_predecessor(row, col)?;

        let handle = ItemHandle(self.items.len());
        self.items.push(Item {
            row,
            col,
            value,
            next_in_row: next,
            next_in_col: None,
        });

        match prev {
            Some(p) => self.items[p.index()].next_in_row = Some(handle),
            None => self.row_heads[row] = Some(handle),
        }
        self.link_column(handle, col_prev);

        Ok(handle)
    }

    /// Change the shape of the matrix
    ///
    /// Growing adds empty chains. Shrinking is refused with
    /// [`Error::ShrinkDiscardsItems`] if any dropped row or column holds an
    /// item; the matrix is then left unchanged.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        debug!(
            from_rows = self.rows,
            from_cols = self.cols,
            rows,
            cols,
            "resizing linked matrix"
        );

        if let Some(index) = (rows..self.rows).find(|&r| self.row_heads[r].is_some()) {
            warn!(index, "resize refused: row still holds items");
            return Err(Error::ShrinkDiscardsItems {
                axis: Axis::Row,
                index,
            });
        }
        if let Some(index) = (cols..self.cols).find(|&c| self.col_heads[c].is_some()) {
            warn!(index, "resize refused: column still holds items");
            return Err(Error::ShrinkDiscardsItems {
                axis: Axis::Col,
                index,
            });
        }

        self.row_heads.resize(rows, None);
        self.col_heads.resize(cols, None);
        if let Some(tails) = self.col_tails.as_mut() {
            tails.resize(cols, None);
        }
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }

    #[cfg(test)]
    pub(crate) fn clear_col_head(&mut self, col: usize) {
        self.col_heads[col] = None;
    }

    fn assert_in_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
    }

    /// Whether a hint can start the walk for `(row, col)`
    fn hint_applies(&self, hint: ItemHandle, row: usize, col: usize) -> bool {
        self.items
            .get(hint.index())
            .is_some_and(|item| item.row == row && item.col <= col)
    }

    /// Bracket `col` within row `row`
    ///
    /// Returns the last item with a smaller column (if any) and the first
    /// item with a column at or past `col` (if any).
    fn locate_in_row(
        &self,
        row: usize,
        col: usize,
        hint: Option<ItemHandle>,
    ) -> (Option<ItemHandle>, Option<ItemHandle>) {
        let start = match hint {
            Some(h) if self.hint_applies(h, row, col) => Some(h),
            Some(h) => {
                trace!(hint = h.index(), row, col, "ignoring hint outside walk range");
                self.row_heads[row]
            }
            None => self.row_heads[row],
        };

        let mut prev = None;
        let mut cursor = start;
        while let Some(handle) = cursor {
            let item = &self.items[handle.index()];
            if item.col >= col {
                break;
            }
            prev = Some(handle);
            cursor = item.next_in_row;
        }
        (prev, cursor)
    }

    /// Find the item a new `(row, col)` entry must follow in its column
    fn column_predecessor(&self, row: usize, col: usize) -> Result<Option<ItemHandle>> {
        if let Some(tails) = self.col_tails.as_ref() {
            let tail = tails[col];
            if let Some(t) = tail {
                let tail_row = self.items[t.index()].row;
                if tail_row >= row {
                    return Err(Error::OutOfOrderAppend { row, col, tail_row });
                }
            }
            return Ok(tail);
        }

        let mut prev = None;
        let mut cursor = self.col_heads[col];
        while let Some(handle) = cursor {
            let item = &self.items[handle.index()];
            if item.row >= row {
                break;
            }
            prev = Some(handle);
            cursor = item.next_in_col;
        }
        Ok(prev)
    }

    fn link_column(&mut self, handle: ItemHandle, prev: Option<ItemHandle>) {
        let col = self.items[handle.index()].col;

        let next = match prev {
            Some(p) => {
                let next = self.items[p.index()].next_in_col;
                self.items[p.index()].next_in_col = Some(handle);
                next
            }
            None => self.col_heads[col].replace(handle),
        };
        self.items[handle.index()].next_in_col = next;

        if let Some(tails) = self.col_tails.as_mut() {
            if next.is_none() {
                tails[col] = Some(handle);
            }
        }
    }
}

impl SparseMatrix for LinkedMatrix {
    fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        if !self.dimensions().contains(row, col) {
            return None;
        }
        self.find(row, col)
            .map(|handle| self.items[handle.index()].value)
    }

    fn dimensions(&self) -> Dimensions {
        LinkedMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        LinkedMatrix::nnz(self)
    }
}

impl MatrixOperations for LinkedMatrix {
    fn get_row(&self, row_index: usize) -> Vec<f64> {
        self.extract_row(row_index)
    }

    fn get_col(&self, col_index: usize) -> Vec<f64> {
        self.extract_col(col_index)
    }
}
