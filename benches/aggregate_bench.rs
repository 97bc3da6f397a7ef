use criterion::{criterion_group, criterion_main, Criterion};
use launchlab::analysis::{analyze, club_rows};
use launchlab::config::AnalysisConfig;
use launchlab::dedup::dedupe;
use launchlab::filter::{apply_filters, FilterCriteria};
use launchlab::sample::sample_shots;
use launchlab::Shot;
use std::hint::black_box;

/// Several seasons of range sessions built from the sample bag.
fn setup_shots() -> Vec<Shot> {
    let base = sample_shots();
    let mut shots = Vec::with_capacity(base.len() * 100);
    for session in 0..100 {
        for (i, s) in base.iter().enumerate() {
            let mut shot = s.clone();
            shot.session_id = format!("bench-{}", session);
            shot.carry_distance = shot.carry_distance.map(|c| c + ((i + session) % 7) as f64);
            shots.push(shot);
        }
    }
    shots
}

fn bench_aggregation(c: &mut Criterion) {
    let shots = setup_shots();
    let config = AnalysisConfig::default();
    let everything = FilterCriteria::default();
    let filtered = FilterCriteria {
        clubs: ["7 Iron".to_string(), "Driver".to_string()].into_iter().collect(),
        carry_min: Some(120.0),
        exclude_outliers: true,
        ..Default::default()
    };

    c.bench_function("filter_only", |b| {
        b.iter(|| apply_filters(black_box(&shots), black_box(&filtered), &config.outliers))
    });

    c.bench_function("club_rows", |b| b.iter(|| club_rows(black_box(&shots))));

    c.bench_function("analyze_all", |b| {
        b.iter(|| analyze(black_box(&shots), black_box(&everything), &config))
    });

    c.bench_function("analyze_filtered", |b| {
        b.iter(|| analyze(black_box(&shots), black_box(&filtered), &config))
    });

    c.bench_function("dedupe_reimport", |b| {
        b.iter(|| dedupe(black_box(&shots), black_box(shots[..500].to_vec())))
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
