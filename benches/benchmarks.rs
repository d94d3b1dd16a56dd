//! Benchmarks for streamhist
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use streamhist::{pipeline, Accumulator, RunningStats};

// ============================================================================
// Running Stats Benchmarks
// ============================================================================

fn bench_running_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_stats");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add", |b| {
        let mut stats = RunningStats::new();
        let mut i = 0u64;
        b.iter(|| {
            stats.add(i as f64);
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("query_all", |b| {
        let mut stats = RunningStats::new();
        for i in 0..100_000u64 {
            stats.add(i as f64);
        }
        b.iter(|| {
            black_box(stats.mean());
            black_box(stats.variance());
            black_box(stats.stddev());
            black_box(stats.min());
            black_box(stats.max());
        });
    });

    group.finish();
}

// ============================================================================
// Accumulator Benchmarks
// ============================================================================

fn bench_accumulator(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulator");
    group.throughput(Throughput::Elements(1));

    group.bench_function("ingest", |b| {
        let lines: Vec<String> = (0..1024).map(|i| format!("{}.25", i)).collect();
        let mut acc = Accumulator::new();
        let mut i = 0usize;
        b.iter(|| {
            acc.ingest(&lines[i & 1023]);
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("finalize_100k", |b| {
        let mut acc = Accumulator::new();
        for i in 0..100_000u64 {
            acc.add(((i * 37) % 101) as f64 * 0.77);
        }
        b.iter_batched(
            || acc.clone(),
            |acc| black_box(acc.finalize()),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ============================================================================
// Pipeline Benchmarks
// ============================================================================

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let input: String = (0..10_000).map(|i| format!("{}\n", (i * 37) % 101)).collect();
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("run_10k_lines", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            pipeline::run(black_box(input.as_bytes()), &mut out).unwrap();
            black_box(out)
        });
    });

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(benches, bench_running_stats, bench_accumulator, bench_pipeline);

criterion_main!(benches);
