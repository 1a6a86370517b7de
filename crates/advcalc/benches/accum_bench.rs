//! Criterion benchmarks for the accumulator.
//! Focus sizes: n in {0, 10, 100, 1000} operations per run.

use advcalc::accum::Accumulator;
use advcalc::stats::{average, sum};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_operands(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3)))
        .collect()
}

fn bench_accum(c: &mut Criterion) {
    let mut group = c.benchmark_group("accum");
    for &n in &[0usize, 10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("add_multiply", n), &n, |b, &n| {
            b.iter_batched(
                || random_operands(n, 43),
                |ops| {
                    let mut acc = Accumulator::<f64>::new();
                    for (k, (x, y)) in ops.into_iter().enumerate() {
                        if k % 2 == 0 {
                            acc.add(x, y);
                        } else {
                            acc.multiply(x, y);
                        }
                    }
                    black_box(acc.history())
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("history_stats", n), &n, |b, &n| {
            let mut acc = Accumulator::<f64>::new();
            for (x, y) in random_operands(n, 44) {
                acc.add(x, y);
            }
            b.iter(|| {
                let h = acc.history();
                black_box((sum(&h), average(&h)))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_accum);
criterion_main!(benches);
