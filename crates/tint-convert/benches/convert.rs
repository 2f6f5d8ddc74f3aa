//! Conversion routing benchmarks.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tint_convert::{convert_raw, Channels, Model};

fn bench_direct_hop(c: &mut Criterion) {
    let rgb = Channels::from([10.0, 30.0, 25.0]);

    c.bench_function("rgb_to_hsl", |b| {
        b.iter(|| convert_raw(Model::Rgb, Model::Hsl, black_box(&rgb)))
    });
}

fn bench_composed_chain(c: &mut Criterion) {
    let rgb = Channels::from([10.0, 30.0, 25.0]);

    c.bench_function("rgb_to_lch", |b| {
        b.iter(|| convert_raw(Model::Rgb, Model::Lch, black_box(&rgb)))
    });
}

fn bench_keyword_nearest(c: &mut Criterion) {
    // Off-table triplet forces the nearest-distance scan.
    let rgb = Channels::from([13.0, 29.0, 251.0]);

    c.bench_function("rgb_to_keyword_nearest", |b| {
        b.iter(|| convert_raw(Model::Rgb, Model::Keyword, black_box(&rgb)))
    });
}

criterion_group!(
    benches,
    bench_direct_hop,
    bench_composed_chain,
    bench_keyword_nearest
);
criterion_main!(benches);
