//! Gram products built from column chains

use crate::linked::{ColumnLinkMode, LinkedMatrix};
use tracing::debug;

impl LinkedMatrix {
    /// Dot product of columns `p` and `q`
    ///
    /// Walks both column chains together, multiplying values whose row
    /// indices match. Returns `None` when no row index matched, so callers
    /// can tell "no overlap" apart from an overlap that sums to zero.
    pub fn column_dot(&self, p: usize, q: usize) -> Option<f64> {
        let mut left = self.col_chain(p).peekable();
        let mut right = self.col_chain(q).peekable();
        let mut sum = 0.0;
        let mut matched = false;

        while let (Some(&a), Some(&b)) = (left.peek(), right.peek()) {
            match a.row().cmp(&b.row()) {
                std::cmp::Ordering::Equal => {
                    sum += a.value() * b.value();
                    matched = true;
                    left.next();
                    right.next();
                }
                std::cmp::Ordering::Less => {
                    left.next();
                }
                std::cmp::Ordering::Greater => {
                    right.next();
                }
            }
        }

        matched.then_some(sum)
    }

    /// Transpose times self, a `cols x cols` matrix
    ///
    /// Entry `(p, q)` holds the dot product of columns `p` and `q` whenever
    /// the two columns share a row. Both triangles are stored. Entries are
    /// produced row-major, so the result uses append-only column linking.
    pub fn gram(&self) -> LinkedMatrix {
        let n = self.cols();
        let mut gram = LinkedMatrix::new(n, n, ColumnLinkMode::AppendOnly);

        for p in 0..n {
            let mut hint = None;
            for q in 0..n {
                if let Some(sum) = self.column_dot(p, q) {
                    hint = Some(gram.set(p, q, sum, hint));
                }
            }
        }

        debug!(cols = n, items = gram.nnz(), "computed gram matrix");
        gram
    }

    /// Mean of the Gram diagonal, `sum_p dot(p, p) / cols`
    ///
    /// A matrix without columns has mean 0.
    pub fn mean_gram_diagonal(&self) -> f64 {
        if self.cols() == 0 {
            return 0.0;
        }
        let total: f64 = (0..self.cols())
            .filter_map(|p| self.column_dot(p, p))
            .sum();
        total / self.cols() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `col0 = [(0, 2)]`, `col1 = [(0, 1), (1, 3)]`
    fn two_by_two() -> LinkedMatrix {
        let mut m = LinkedMatrix::new(2, 2, ColumnLinkMode::General);
        m.set(0, 0, 2.0, None);
        m.set(0, 1, 1.0, None);
        m.set(1, 1, 3.0, None);
        m
    }

    #[test]
    fn test_gram_values() {
        let gram = two_by_two().gram();
        assert_eq!(gram.get(0, 0), 4.0);
        assert_eq!(gram.get(1, 1), 10.0);
        assert_eq!(gram.get(0, 1), 2.0);
        assert_eq!(gram.get(1, 0), 2.0);
        assert_eq!(gram.nnz(), 4);
        assert_eq!(gram.link_mode(), ColumnLinkMode::AppendOnly);
    }

    #[test]
    fn test_gram_skips_disjoint_columns() {
        let mut m = LinkedMatrix::new(3, 3, ColumnLinkMode::General);
        m.set(0, 0, 1.0, None);
        m.set(1, 1, 1.0, None);
        m.set(2, 2, 0.0, None);

        let gram = m.gram();
        // Column 2 overlaps itself with a zero product; still stored
        assert_eq!(gram.nnz(), 3);
        assert!(gram.contains(2, 2));
        assert!(!gram.contains(0, 1));
    }

    #[test]
    fn test_column_dot() {
        let m = two_by_two();
        assert_eq!(m.column_dot(0, 1), Some(2.0));
        assert_eq!(m.column_dot(1, 1), Some(10.0));

        let empty = LinkedMatrix::new(2, 2, ColumnLinkMode::General);
        assert_eq!(empty.column_dot(0, 1), None);
    }

    #[test]
    fn test_mean_gram_diagonal() {
        assert_eq!(two_by_two().mean_gram_diagonal(), 7.0);
        assert_eq!(
            LinkedMatrix::new(3, 0, ColumnLinkMode::General).mean_gram_diagonal(),
            0.0
        );
    }
}
