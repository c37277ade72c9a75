//! Benchmarks for indicator implementations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xtb_indicators::Ichimoku;

fn generate_test_data(size: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let close: Vec<f64> = (0..size)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect();
    let high: Vec<f64> = close.iter().map(|c| c + 1.5).collect();
    let low: Vec<f64> = close.iter().map(|c| c - 1.5).collect();
    (high, low, close)
}

fn benchmark_ichimoku(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ichimoku");

    for size in [1000, 10000, 100000].iter() {
        let (high, low, close) = generate_test_data(*size);

        group.bench_with_input(
            BenchmarkId::new("standard", size),
            &(high, low, close),
            |b, (high, low, close)| {
                let ichimoku = Ichimoku::new();
                b.iter(|| ichimoku.calculate(black_box(high), black_box(low), black_box(close)))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_ichimoku);
criterion_main!(benches);
