//! Performance benchmarks for the Euler integration loop.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use outstar::{EulerIntegrator, OutstarState, Regime};

fn bench_full_run(c: &mut Criterion) {
    let integrator = EulerIntegrator::new(0.00035, 0.1, 10_000);

    c.bench_function("run_regime_a_10k", |b| {
        b.iter(|| {
            black_box(integrator.run(black_box(Regime::A), OutstarState::initial()));
        });
    });

    c.bench_function("run_regime_b_10k", |b| {
        b.iter(|| {
            black_box(integrator.run(black_box(Regime::B), OutstarState::initial()));
        });
    });
}

fn bench_step_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_scaling");

    for tb in [1_000u64, 10_000, 100_000].iter() {
        let integrator = EulerIntegrator::new(0.00035, 0.1, *tb);
        group.bench_with_input(BenchmarkId::from_parameter(tb), tb, |b, _| {
            b.iter(|| {
                black_box(integrator.run(Regime::A, OutstarState::initial()));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_run, bench_step_counts);
criterion_main!(benches);
