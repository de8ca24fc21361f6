//! Performance benchmarks for loading and panel derivation
//!
//! A long solver run leaves thousands of snapshot files behind, each one
//! parsed and reduced to panel bounds before drawing. These benchmarks
//! measure those two stages in isolation (drawing is dominated by the
//! plotting backend and is not measured here).
//!
//! # What We're Measuring
//!
//! 1. **parse_dataset**: text → column-major `Dataset`
//!    - Linear in the number of fields
//! 2. **panels_for**: `Dataset` → 6 or 7 panels with axis bounds
//!    - One min/max pass per column
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --bench loader_performance
//!
//! # Parsing only
//! cargo bench --bench loader_performance parse
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use spinplot::data::parse_dataset;
use spinplot::output::visualization::DatasetKind;

// =================================================================================================
// Helpers
// =================================================================================================

/// Snapshot-shaped text: position + 6 series, trailing space like the solver
fn snapshot_text(points: usize) -> String {
    let mut text = String::with_capacity(points * 7 * 12);
    for i in 0..points {
        let x = i as f64 * 1e-9;
        text.push_str(&format!("{} ", x));
        for j in 1..=6 {
            text.push_str(&format!("{} ", (x * 1e8 * j as f64).sin()));
        }
        text.push('\n');
    }
    text
}

// =================================================================================================
// Benchmarks
// =================================================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for points in [100, 1_000, 10_000] {
        let text = snapshot_text(points);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(points), &text, |b, text| {
            b.iter(|| parse_dataset(black_box(text)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_panels(c: &mut Criterion) {
    let mut group = c.benchmark_group("panels");

    for points in [1_000, 100_000] {
        let dataset = parse_dataset(&snapshot_text(points)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(points), &dataset, |b, dataset| {
            b.iter(|| DatasetKind::Snapshot.panels_for(black_box(dataset)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse, benchmark_panels);
criterion_main!(benches);
