use std::hint::black_box;
use std::str::FromStr;

use criterion::{criterion_group, criterion_main, Criterion};
use tinge::{Hsv, Rgb};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    group.bench_function("rgb-to-hsv", |b| {
        b.iter(|| black_box(Rgb::new(0.3, 0.6, 0.9)).to_hsv())
    });

    group.bench_function("hsv-to-rgb", |b| {
        b.iter(|| black_box(Hsv::new(210.0, 0.66, 0.9)).to_rgb())
    });

    group.bench_function("round-trip", |b| {
        b.iter(|| black_box(Rgb::new(0.3, 0.6, 0.9)).to_hsv().to_rgb())
    });

    group.bench_function("parse-hex", |b| {
        b.iter(|| Rgb::from_str(black_box("#4d99e6")))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
