//! Criterion benchmarks for the closed-form evaluation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use parfib_core::fib_closed_form;

fn bench_closed_form(c: &mut Criterion) {
    let ns: Vec<u64> = vec![2, 10, 50, 70, 93];

    let mut group = c.benchmark_group("ClosedForm");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| fib_closed_form(black_box(n)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_closed_form);
criterion_main!(benches);
