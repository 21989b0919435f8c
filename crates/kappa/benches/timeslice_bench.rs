//! Criterion benchmarks for the batch runner and the section evaluator.
//! Mirrors the demo driver: 200 cuts over the full strain range.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use kappa::api::{
    compute_area_timeslices, demo_compression, demo_tension, draw_polyline, linspace,
    prep_timeslices, sweep_with, CrossSection, PolylineCfg, SectionEvaluator, Silent,
};

fn bench_timeslices(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeslice");
    for &n in &[3usize, 1000, 20_000] {
        let source = if n == 3 {
            demo_compression()
        } else {
            let cfg = PolylineCfg {
                points: n,
                ..PolylineCfg::default()
            };
            draw_polyline(&cfg, 7).unwrap()
        };
        let hi = source.last().unwrap().0;
        let cuts = linspace(0.0, hi, 200);

        group.bench_with_input(BenchmarkId::new("sweep", n), &n, |b, _| {
            b.iter(|| sweep_with(&cuts, &source, &Silent))
        });
        group.bench_with_input(BenchmarkId::new("area_only", n), &n, |b, _| {
            b.iter_batched(
                || prep_timeslices(&cuts, &source),
                |slices| compute_area_timeslices(&slices),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_section(c: &mut Criterion) {
    let cs = CrossSection::new(300.0);
    let ev = SectionEvaluator::new(&cs, demo_compression(), demo_tension());
    let grid = linspace(0.0, 0.003, 200);
    c.bench_function("section/eval_many_200", |b| {
        b.iter(|| ev.eval_many(&grid, 1e-5))
    });
}

criterion_group!(benches, bench_timeslices, bench_section);
criterion_main!(benches);
