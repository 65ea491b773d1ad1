//! Criterion benchmarks for the per-step cost of each engine.
//!
//! Uses seeded random instances so runs are comparable across machines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tsp_metaheur::ga::{GaConfig, GaState};
use tsp_metaheur::geometry::{random_points, Point};
use tsp_metaheur::pso::{PsoConfig, PsoState};
use tsp_metaheur::sa::SaState;
use tsp_metaheur::tabu::TabuState;

fn instance(n: usize) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(7);
    random_points(n, 800.0, 600.0, 30.0, &mut rng)
}

fn bench_ga_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_step");
    for n in [20, 50, 100] {
        let points = instance(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            let mut rng = StdRng::seed_from_u64(42);
            let mut state = GaState::init(points, &GaConfig::default(), &mut rng).unwrap();
            b.iter(|| {
                state.step(points, &mut rng);
                black_box(state.best_score())
            });
        });
    }
    group.finish();
}

fn bench_sa_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_step");
    for n in [20, 50, 100] {
        let points = instance(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            let mut rng = StdRng::seed_from_u64(42);
            let mut state = SaState::init(points, &mut rng).unwrap();
            b.iter(|| {
                state.step(points, &mut rng);
                black_box(state.best_score())
            });
        });
    }
    group.finish();
}

fn bench_tabu_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu_step");
    // O(n^3) per step; keep instances small.
    for n in [10, 20, 40] {
        let points = instance(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            let mut rng = StdRng::seed_from_u64(42);
            let mut state = TabuState::init(points, &mut rng).unwrap();
            b.iter(|| {
                state.step(points, &mut rng);
                black_box(state.best_score())
            });
        });
    }
    group.finish();
}

fn bench_pso_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso_step");
    for n in [20, 50, 100] {
        let points = instance(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            let mut rng = StdRng::seed_from_u64(42);
            let mut state = PsoState::init(points, &PsoConfig::default(), &mut rng).unwrap();
            b.iter(|| {
                state.step(points, &mut rng);
                black_box(state.best_score())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_ga_step,
    bench_sa_step,
    bench_tabu_step,
    bench_pso_step
);
criterion_main!(benches);
