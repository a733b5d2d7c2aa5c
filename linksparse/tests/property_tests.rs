//! Property-based tests using proptest
//!
//! Random insertion orders must leave both chain views consistent and agree
//! with a plain map of summed values.

use linksparse::{
    import_from, read_matrix_from, write_matrix_to, ColumnLinkMode, LinkedMatrix, MatrixConfig,
    TextFormat,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;

const ROWS: usize = 12;
const COLS: usize = 9;

// Integral values keep sums exact regardless of insertion order
fn entry_strategy() -> impl Strategy<Value = (usize, usize, f64)> {
    (0..ROWS, 0..COLS, -50i32..50).prop_map(|(r, c, v)| (r, c, v as f64))
}

fn entries_strategy() -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
    prop::collection::vec(entry_strategy(), 0..80)
}

fn build(entries: &[(usize, usize, f64)]) -> LinkedMatrix {
    let mut m = LinkedMatrix::new(ROWS, COLS, ColumnLinkMode::General);
    for &(r, c, v) in entries {
        m.set(r, c, v, None);
    }
    m
}

fn expected(entries: &[(usize, usize, f64)]) -> BTreeMap<(usize, usize), f64> {
    let mut map = BTreeMap::new();
    for &(r, c, v) in entries {
        *map.entry((r, c)).or_insert(0.0) += v;
    }
    map
}

proptest! {
    // Property: any insertion sequence leaves the chains consistent
    #[test]
    fn test_check_after_random_inserts(entries in entries_strategy()) {
        let m = build(&entries);
        let report = m.check();
        prop_assert!(report.is_consistent(), "violations: {:?}", report.violations);
        prop_assert_eq!(report.via_rows, m.nnz());
    }

    // Property: duplicates sum and each distinct position is one item
    #[test]
    fn test_values_match_summed_map(entries in entries_strategy()) {
        let m = build(&entries);
        let map = expected(&entries);

        prop_assert_eq!(m.nnz(), map.len());
        for r in 0..ROWS {
            for c in 0..COLS {
                let want = map.get(&(r, c)).copied().unwrap_or(0.0);
                prop_assert_eq!(m.get(r, c), want);
            }
        }
    }

    // Property: hints never change the outcome
    #[test]
    fn test_hinted_inserts_match(entries in entries_strategy()) {
        let plain = build(&entries);

        let mut hinted = LinkedMatrix::new(ROWS, COLS, ColumnLinkMode::General);
        let mut hint = None;
        for &(r, c, v) in &entries {
            hint = Some(hinted.set(r, c, v, hint));
        }

        let a: Vec<_> = plain.entries().collect();
        let b: Vec<_> = hinted.entries().collect();
        prop_assert_eq!(a, b);
        prop_assert!(hinted.check().is_consistent());
    }

    // Property: append-only loading of row-major data matches general mode
    #[test]
    fn test_append_only_matches_general(entries in entries_strategy()) {
        let general = build(&entries);
        let mut append = LinkedMatrix::new(ROWS, COLS, ColumnLinkMode::AppendOnly);
        for (r, c, v) in general.entries() {
            append.set(r, c, v, None);
        }

        let a: Vec<_> = general.entries().collect();
        let b: Vec<_> = append.entries().collect();
        prop_assert_eq!(a, b);
        for c in 0..COLS {
            let x: Vec<_> = general.col_entries(c).collect();
            let y: Vec<_> = append.col_entries(c).collect();
            prop_assert_eq!(x, y);
        }
    }

    // Property: the Gram matrix is symmetric
    #[test]
    fn test_gram_symmetric(entries in entries_strategy()) {
        let gram = build(&entries).gram();
        prop_assert!(gram.check().is_consistent());
        for p in 0..COLS {
            for q in 0..COLS {
                prop_assert_eq!(gram.get(p, q), gram.get(q, p));
            }
        }
    }

    // Property: density never drops as positions are set
    #[test]
    fn test_density_monotone(entries in entries_strategy()) {
        let mut m = LinkedMatrix::new(ROWS, COLS, ColumnLinkMode::General);
        let mut last = m.stats().density;
        for &(r, c, v) in &entries {
            m.set(r, c, v, None);
            let stats = m.stats();
            prop_assert!(stats.density >= last);
            let want = 100.0 * stats.items as f64 / (ROWS * COLS) as f64;
            prop_assert!((stats.density - want).abs() < 1e-9);
            last = stats.density;
        }
    }

    // Property: text round trips keep every value in both layouts
    #[test]
    fn test_text_round_trip(entries in entries_strategy()) {
        let m = build(&entries);
        for format in [TextFormat::Triplet, TextFormat::RowGrouped] {
            let mut text = Vec::new();
            write_matrix_to(&m, &mut text, format, &MatrixConfig::default()).unwrap();
            let back = read_matrix_from(text.as_slice(), format, &MatrixConfig::default()).unwrap();

            prop_assert_eq!(back.dimensions(), m.dimensions());
            let a: Vec<_> = m.entries().collect();
            let b: Vec<_> = back.entries().collect();
            prop_assert_eq!(a, b);
        }
    }
}

#[test]
fn test_shuffled_orders_agree() {
    let mut entries: Vec<(usize, usize, f64)> = (0..ROWS)
        .flat_map(|r| {
            (0..COLS)
                .filter(move |c| (r + c) % 3 == 0)
                .map(move |c| (r, c, (r * COLS + c) as f64))
        })
        .collect();
    let reference = build(&entries);

    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10 {
        entries.shuffle(&mut rng);
        let m = build(&entries);
        assert!(m.check().is_consistent());
        let a: Vec<_> = reference.entries().collect();
        let b: Vec<_> = m.entries().collect();
        assert_eq!(a, b);
    }
}

#[test]
fn test_import_twice_doubles() {
    let entries = vec![(0, 0, 1.5), (3, 4, -2.0), (11, 8, 0.25)];
    let m = build(&entries);
    let mut text = Vec::new();
    write_matrix_to(&m, &mut text, TextFormat::RowGrouped, &MatrixConfig::default()).unwrap();

    let mut target = m.clone();
    import_from(&mut target, text.as_slice(), TextFormat::RowGrouped).unwrap();
    for &(r, c, v) in &entries {
        assert_eq!(target.get(r, c), 2.0 * v);
    }
    assert_eq!(target.nnz(), 3);
}
