//! Criterion benchmarks for the shoelace kernels.
//! Focus sizes: n in {8, 64, 1024, 20000} vertices.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p kappa

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kappa::api::{
    area_and_moment, area_and_moment_lanes, area_and_moment_simd, draw_polyline, try_prep,
    PolylineCfg,
};

fn polygon(n: usize, seed: u64) -> kappa::api::Points {
    let cfg = PolylineCfg {
        points: n,
        ..PolylineCfg::default()
    };
    let lm = draw_polyline(&cfg, seed).unwrap();
    let cut = lm.last().unwrap().0;
    try_prep(cut, &lm).unwrap()
}

fn bench_shoelace(c: &mut Criterion) {
    let mut group = c.benchmark_group("shoelace");
    for &n in &[8usize, 64, 1024, 20_000] {
        let p = polygon(n, 42);
        group.bench_with_input(BenchmarkId::new("scalar", n), &p, |b, p| {
            b.iter(|| area_and_moment(p))
        });
        group.bench_with_input(BenchmarkId::new("lanes4", n), &p, |b, p| {
            b.iter(|| area_and_moment_simd(p))
        });
        group.bench_with_input(BenchmarkId::new("lanes8", n), &p, |b, p| {
            b.iter(|| area_and_moment_lanes::<8>(p))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shoelace);
criterion_main!(benches);
