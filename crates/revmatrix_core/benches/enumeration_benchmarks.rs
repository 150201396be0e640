//! Criterion benchmarks for revmatrix_core
//!
//! Run with: cargo bench -p revmatrix_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use revmatrix_core::{
    MatrixSweep, ReconstructionBuilder, RoundingPolicy, SampleComposition, compute, find_range,
};

fn bench_find_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_range");
    let policy = RoundingPolicy::new(2);

    for total in [200u32, 2_000, 20_000] {
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &total| {
            b.iter(|| find_range(black_box(total), black_box(0.75), policy));
        });
    }

    group.finish();
}

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");

    for size in [100u32, 1_000, 5_000] {
        let composition = SampleComposition::new(size, size);
        let Some(range) = find_range(composition.total(), 0.75, RoundingPolicy::new(2)) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(size), &range, |b, range| {
            b.iter(|| MatrixSweep::new(black_box(composition), range).count());
        });
    }

    group.finish();
}

fn bench_compute_legacy(c: &mut Criterion) {
    let Ok(config) = ReconstructionBuilder::new(981, 981)
        .decimal_places(2)
        .accuracy(0.75)
        .sensitivity(0.86)
        .specificity(0.64)
        .f1(0.77)
        .precision(0.71)
        .build()
    else {
        return;
    };

    c.bench_function("compute_legacy_981", |b| {
        b.iter(|| compute(black_box(&config)));
    });
}

criterion_group!(benches, bench_find_range, bench_enumerate, bench_compute_legacy);
criterion_main!(benches);
