use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cron_explain::{describe, validate, Expression};

const EXPRESSIONS: &[&str] = &[
    "* * * * *",
    "0 0 * * *",
    "5 1,2,3 * * *",
    "*/15 9-17 ? * MON-FRI",
    "7-9,15-25,*/30 * * * *",
    "0 0 L JAN,JUN 2#5",
    "1-30/5 0-12/2 1,15,L */3 *",
];

pub fn validate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for expression in EXPRESSIONS {
        group.bench_with_input(BenchmarkId::from_parameter(expression), expression, |b, e| {
            b.iter(|| validate(e).unwrap())
        });
    }
    group.finish();
}

pub fn describe_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe");
    for expression in EXPRESSIONS {
        group.bench_with_input(BenchmarkId::from_parameter(expression), expression, |b, e| {
            b.iter(|| describe(e).unwrap())
        });
    }
    group.finish();
}

pub fn expression_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("expression");
    for expression in EXPRESSIONS {
        let parsed = Expression::new(*expression).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(expression), &parsed, |b, e| {
            b.iter(|| e.describe())
        });
    }
    group.finish();
}

criterion_group!(benches, validate_benchmark, describe_benchmark, expression_benchmark);
criterion_main!(benches);
