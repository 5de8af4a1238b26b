use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use lsap_core::{solve, Assignment, CostMatrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn fixed_benchmark(c: &mut Criterion) {
    #[rustfmt::skip]
    let data = [
        20.0, 15.0, 18.0, 20.0, 25.0,
        18.0, 20.0, 12.0, 14.0, 15.0,
        21.0, 23.0, 25.0, 27.0, 25.0,
        17.0, 18.0, 21.0, 23.0, 20.0,
        18.0, 18.0, 16.0, 19.0, 20.0,
    ];
    let costs = CostMatrix::from_slice(&data, 5, 5).unwrap();

    c.bench_function("solve_5x5", |b| {
        b.iter(|| solve::<i64, f64>(black_box(&costs)).unwrap())
    });
}

pub fn random_square_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_random_square");
    let mut rng = StdRng::seed_from_u64(7);
    for size in (1..8).map(|i| 2usize.pow(i)) {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched_ref(
                || {
                    (0..size * size)
                        .map(|_| rng.gen_range(0.0..1.0))
                        .collect::<Vec<f64>>()
                },
                |data| {
                    let costs = CostMatrix::from_slice(data, size, size).unwrap();
                    let _: Assignment<i64, f64> = solve(black_box(&costs)).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

pub fn random_rectangular_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_random_rectangular");
    let mut rng = StdRng::seed_from_u64(11);
    for nrows in [16usize, 64] {
        let ncols = nrows * 4;
        let label = format!("{nrows}x{ncols}");
        group.bench_with_input(BenchmarkId::from_parameter(label), &nrows, |b, &nrows| {
            b.iter_batched_ref(
                || {
                    (0..nrows * ncols)
                        .map(|_| rng.gen_range(0.0..1.0))
                        .collect::<Vec<f64>>()
                },
                |data| {
                    let costs = CostMatrix::from_slice(data, nrows, ncols).unwrap();
                    let _: Assignment<i64, f64> = solve(black_box(&costs)).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    fixed_benchmark,
    random_square_benchmarks,
    random_rectangular_benchmarks
);
criterion_main!(benches);
