//! Loading and Gram benchmarks for linked matrices.
//!
//! Compares append-only column linking against general column walks on
//! row-major input, and measures the Gram product on the loaded matrix.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use linksparse::{read_matrix_from, ColumnLinkMode, LinkedMatrix, MatrixConfig, TextFormat};

/// Row-major `(row, col, value)` entries with roughly `density` fill
fn random_entries(rows: usize, cols: usize, density: f64, seed: u64) -> Vec<(usize, usize, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut entries = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen::<f64>() < density {
                entries.push((row, col, rng.gen_range(-1.0..1.0)));
            }
        }
    }
    entries
}

fn build(
    rows: usize,
    cols: usize,
    entries: &[(usize, usize, f64)],
    mode: ColumnLinkMode,
) -> LinkedMatrix {
    let mut matrix = LinkedMatrix::new(rows, cols, mode);
    let mut hint = None;
    let mut current_row = usize::MAX;
    for &(row, col, value) in entries {
        if row != current_row {
            hint = None;
            current_row = row;
        }
        hint = Some(matrix.set(row, col, value, hint));
    }
    matrix
}

fn column_linking(c: &mut Criterion) {
    let mut group = c.benchmark_group("column_linking");
    group.warm_up_time(Duration::from_secs(2));

    for &size in &[200usize, 1000] {
        let entries = random_entries(size, size, 0.01, 42);
        group.throughput(Throughput::Elements(entries.len() as u64));

        for (name, mode) in [
            ("append_only", ColumnLinkMode::AppendOnly),
            ("general", ColumnLinkMode::General),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &entries, |b, entries| {
                b.iter(|| build(size, size, black_box(entries), mode));
            });
        }
    }
    group.finish();
}

fn text_loading(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_loading");
    let size = 1000;
    let entries = random_entries(size, size, 0.01, 7);
    let matrix = build(size, size, &entries, ColumnLinkMode::AppendOnly);

    let mut text = Vec::new();
    linksparse::write_matrix_to(
        &matrix,
        &mut text,
        TextFormat::RowGrouped,
        &MatrixConfig::default(),
    )
    .unwrap();
    group.throughput(Throughput::Bytes(text.len() as u64));

    for (name, config) in [
        ("append_only", MatrixConfig::append_only()),
        ("general", MatrixConfig::default()),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                read_matrix_from(black_box(text.as_slice()), TextFormat::RowGrouped, &config)
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn gram_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("gram");
    group.sample_size(20);

    for &size in &[100usize, 300] {
        let entries = random_entries(size, size, 0.05, 11);
        let matrix = build(size, size, &entries, ColumnLinkMode::AppendOnly);
        group.bench_with_input(BenchmarkId::from_parameter(size), &matrix, |b, matrix| {
            b.iter(|| black_box(matrix).gram());
        });
    }
    group.finish();
}

criterion_group!(benches, column_linking, text_loading, gram_product);
criterion_main!(benches);
