// benches/rational_operations.rs
//
// Construction and arithmetic throughput for machine-width and big rationals.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use frac_core::{BigRational, Rational};
use num_bigint::BigInt;

fn bench_construction(c: &mut Criterion) {
    c.bench_function("construction_i64", |b| {
        b.iter(|| Rational::new(black_box(123_456i64), black_box(-7_890)).ok());
    });

    c.bench_function("construction_bigint", |b| {
        let n = BigInt::from(123_456_789_012i64) * BigInt::from(987_654_321i64);
        let d = BigInt::from(-246_913_578_024i64);
        b.iter(|| BigRational::new(black_box(n.clone()), black_box(d.clone())).ok());
    });
}

fn bench_harmonic_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("harmonic_sum");

    // i64 overflows past ~20 terms.
    for terms in [5i64, 10, 20].iter() {
        group.bench_with_input(BenchmarkId::new("i64", terms), terms, |b, &terms| {
            b.iter(|| {
                (1..=terms)
                    .map(|d| Rational::from_integer(1i64) / d)
                    .fold(Rational::from_integer(0i64), |acc, term| acc + term)
            });
        });

        group.bench_with_input(BenchmarkId::new("bigint", terms), terms, |b, &terms| {
            b.iter(|| {
                (1..=terms)
                    .map(|d| BigRational::from_integer(BigInt::from(1)) / BigInt::from(d))
                    .fold(BigRational::from_integer(BigInt::from(0)), |acc, term| acc + term)
            });
        });
    }
    group.finish();
}

fn bench_reflected_division(c: &mut Criterion) {
    let value = Rational::new(7i64, 12).unwrap_or_default();
    c.bench_function("reflected_division", |b| {
        b.iter(|| Rational::integer_divided_by(black_box(&36i64), black_box(&value)).ok());
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_harmonic_sum,
    bench_reflected_division
);
criterion_main!(benches);
