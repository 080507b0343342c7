//! Criterion benchmarks for the Fibonacci engine.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigUint;

use lucasfib_core::calculator::Calculator;
use lucasfib_core::lucas::evaluate;
use lucasfib_core::options::Options;

fn compute(calc: &dyn Calculator, n: u64) -> BigUint {
    calc.calculate(n, &Options::default()).unwrap()
}

fn bench_engine(c: &mut Criterion) {
    let calc = lucasfib_core::default_calculator();

    // Odd indices never enter the Lucas phase; powers of two are all
    // Lucas phase.
    let odd: Vec<u64> = vec![1_001, 10_001, 100_001, 1_000_001];
    let even: Vec<u64> = vec![1 << 10, 1 << 14, 1 << 17, 1 << 20];

    let mut group = c.benchmark_group("OddIndex");
    for &n in &odd {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| compute(calc.as_ref(), n));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("PowerOfTwo");
    for &n in &even {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| evaluate(n));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
