//! Throughput of the calculator operations in both output modes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memocalc::{Calculator, Number};

fn bench_numeric(c: &mut Criterion) {
    let calc = Calculator::default();
    let mut group = c.benchmark_group("numeric");

    group.bench_function("add_int", |b| {
        b.iter(|| calc.add(black_box(1_234), black_box(5_678)))
    });
    group.bench_function("divide_exact", |b| {
        b.iter(|| calc.divide(black_box(4_096), black_box(64)))
    });
    group.bench_function("divide_remainder", |b| {
        b.iter(|| calc.divide(black_box(2), black_box(3)))
    });
    group.bench_function("sqrt_rounded", |b| b.iter(|| calc.sqrt(black_box(8))));

    group.finish();
}

fn bench_stringified(c: &mut Criterion) {
    let calc = Calculator::stringified();
    let mut group = c.benchmark_group("stringified");

    group.bench_function("add_float", |b| {
        b.iter(|| calc.add(black_box(1.32), black_box(-2)))
    });
    group.bench_function("pow_fraction", |b| {
        b.iter(|| calc.pow(black_box(27), black_box(1.0 / 3.0)))
    });

    group.finish();
}

fn bench_memory(c: &mut Criterion) {
    let mut calc = Calculator::default();

    c.bench_function("memory_store_recall", |b| {
        b.iter(|| {
            calc.set_memory(black_box(Number::Int(8)));
            calc.memory()
        })
    });
}

criterion_group!(benches, bench_numeric, bench_stringified, bench_memory);
criterion_main!(benches);
