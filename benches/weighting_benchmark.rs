use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rwa_engine::config::EngineConfig;
use rwa_engine::engine::weighting::WeightingEngine;
use rwa_engine::simulation::portfolio::{generate_random_portfolio, PortfolioConfig};

fn portfolio(count: usize) -> rwa_engine::core::exposure::ExposureSet {
    generate_random_portfolio(&PortfolioConfig {
        exposure_count: count,
        seed: Some(2024),
        ..Default::default()
    })
}

fn bench_weighting_1k(c: &mut Criterion) {
    let set = portfolio(1_000);
    let engine = WeightingEngine::new(EngineConfig::sequential());

    c.bench_function("weighting_1k_exposures", |b| {
        b.iter(|| engine.run(black_box(&set)))
    });
}

fn bench_weighting_100k_sequential(c: &mut Criterion) {
    let set = portfolio(100_000);
    let engine = WeightingEngine::new(EngineConfig::sequential());

    c.bench_function("weighting_100k_sequential", |b| {
        b.iter(|| engine.run(black_box(&set)))
    });
}

fn bench_weighting_100k_parallel(c: &mut Criterion) {
    let set = portfolio(100_000);
    let engine = WeightingEngine::default();

    c.bench_function("weighting_100k_parallel", |b| {
        b.iter(|| engine.run(black_box(&set)))
    });
}

criterion_group!(
    benches,
    bench_weighting_1k,
    bench_weighting_100k_sequential,
    bench_weighting_100k_parallel
);
criterion_main!(benches);
