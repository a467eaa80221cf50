use criterion::{black_box, criterion_group, criterion_main, Criterion};

use talent_core::models::WeightParameters;
use talent_matching::{BatchCandidate, MatchingEngine};

const DIMENSIONS: usize = 384;

fn embedding(seed: usize) -> Vec<f32> {
    (0..DIMENSIONS)
        .map(|i| (((seed * 31 + i * 17) % 97) as f32 / 97.0) - 0.5)
        .collect()
}

fn bench_single_match(c: &mut Criterion) {
    let engine = MatchingEngine::default();
    let weights = WeightParameters::default();
    let job = embedding(0);
    let candidate = embedding(1);

    c.bench_function("compute_match_384d", |b| {
        b.iter(|| {
            engine
                .compute_match(black_box(&job), black_box(&candidate), 7.5, &weights, "c", "j")
                .ok()
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let engine = MatchingEngine::default();
    let weights = WeightParameters::default();
    let job = embedding(0);
    let candidates: Vec<BatchCandidate> = (1..=500)
        .map(|i| BatchCandidate::new(format!("cand-{i}"), embedding(i), Some((i % 11) as f64)))
        .collect();

    c.bench_function("match_batch_500x384d", |b| {
        b.iter(|| engine.match_batch(black_box(&job), black_box(&candidates), &weights, "job"))
    });
}

criterion_group!(benches, bench_single_match, bench_batch);
criterion_main!(benches);
