// File: crates/termchart-core/benches/shrink_bench.rs
// Purpose: Benchmark bucket downsampling across policies and target sizes.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use termchart_core::downsample::{shrink, Distribution};
use termchart_core::Aggregation;

fn gen_wave(n: usize) -> Vec<f64> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // simple waveform with drift
        v.push((i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001));
    }
    v
}

fn bench_shrink(c: &mut Criterion) {
    let mut group = c.benchmark_group("shrink");
    for &n in &[50_000usize, 100_000usize] {
        let data = gen_wave(n);
        for &target in &[80usize, 200usize, 1_000usize] {
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("linear_n{n}_t{target}")),
                &target,
                |b, &t| {
                    b.iter_batched(
                        || data.clone(),
                        |d| {
                            let _ = black_box(shrink(&d, t, Distribution::Linear, Aggregation::Mean));
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("invlog_n{n}_t{target}")),
                &target,
                |b, &t| {
                    b.iter_batched(
                        || data.clone(),
                        |d| {
                            let _ = black_box(shrink(
                                &d,
                                t,
                                Distribution::InvertedLog { ratio: 1.0 },
                                Aggregation::Max,
                            ));
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_shrink);
criterion_main!(benches);
