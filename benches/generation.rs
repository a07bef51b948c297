//! Benchmark for full-scenario trajectory generation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use trendlab::axis::SampleAxis;
use trendlab::config;
use trendlab::trajectory;

fn bench_full_scenario(c: &mut Criterion) {
    let scenario = config::scenario();
    let axis = SampleAxis::build(scenario.start, scenario.end, scenario.interval_days)
        .expect("scenario axis");

    c.bench_function("generate_all_entities", |b| {
        b.iter(|| {
            for entity in &scenario.entities {
                let mut rng = StdRng::seed_from_u64(scenario.entity_seed(entity.name));
                let traj =
                    trajectory::generate(entity.name, &axis, &entity.regimes, &mut rng)
                        .expect("well-formed scenario table");
                black_box(traj);
            }
        });
    });
}

fn bench_axis_build(c: &mut Criterion) {
    let scenario = config::scenario();
    c.bench_function("build_weekly_axis", |b| {
        b.iter(|| {
            let axis =
                SampleAxis::build(scenario.start, scenario.end, scenario.interval_days)
                    .expect("scenario axis");
            black_box(axis);
        });
    });
}

criterion_group!(benches, bench_full_scenario, bench_axis_build);
criterion_main!(benches);
