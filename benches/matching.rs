//! Benchmarks for the stable matching engine.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- full_run
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main,
    BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stable_matching::engine::{proposal, validator};
use stable_matching::roster::Roster;
use stable_matching::{Participants, ProposingSide, Side, StableMatcher};

// ============================================================================
// HELPER FUNCTIONS - Deterministic profile generation
// ============================================================================

/// Random complete profile with `n` members per side
fn generate_profile(n: usize, seed: u64) -> Participants {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let proposer_ids: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();
    let receiver_ids: Vec<String> = (0..n).map(|i| format!("r{i}")).collect();

    let mut first = Side::new("proposers");
    for id in &proposer_ids {
        let mut ranking = receiver_ids.clone();
        ranking.shuffle(&mut rng);
        first = first.with_member(id.as_str(), ranking);
    }

    let mut second = Side::new("receivers");
    for id in &receiver_ids {
        let mut ranking = proposer_ids.clone();
        ranking.shuffle(&mut rng);
        second = second.with_member(id.as_str(), ranking);
    }

    Participants::new(first, second)
}

/// Worst case for proposals: everybody ranks the other side identically
fn generate_uniform_profile(n: usize) -> Participants {
    let proposer_ids: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();
    let receiver_ids: Vec<String> = (0..n).map(|i| format!("r{i}")).collect();

    let mut first = Side::new("proposers");
    for id in &proposer_ids {
        first = first.with_member(id.as_str(), receiver_ids.clone());
    }

    let mut second = Side::new("receivers");
    for id in &receiver_ids {
        second = second.with_member(id.as_str(), proposer_ids.iter().rev().cloned());
    }

    Participants::new(first, second)
}

// ============================================================================
// BENCHMARK: Full Run
// ============================================================================

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.measurement_time(Duration::from_secs(10));

    for n in [10, 100, 500] {
        let participants = generate_profile(n, 42);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_with_input(BenchmarkId::new("random", n), &participants, |b, participants| {
            let matcher = StableMatcher::default();
            b.iter(|| black_box(matcher.run(participants)))
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Stages
// ============================================================================

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    group.measurement_time(Duration::from_secs(5));

    let participants = generate_profile(200, 7);

    group.bench_function("validate_200", |b| {
        b.iter(|| black_box(validator::check(&participants)))
    });

    group.bench_function("roster_200", |b| {
        b.iter(|| black_box(Roster::build(&participants, ProposingSide::First)))
    });

    group.bench_function("proposals_200", |b| {
        b.iter_batched(
            || Roster::build(&participants, ProposingSide::First),
            |roster| black_box(proposal::run(&roster).proposals),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Worst Case
// ============================================================================
// Identical rankings force n(n+1)/2 proposals

fn bench_worst_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("worst_case");
    group.sample_size(20);

    for n in [50, 200] {
        let participants = generate_uniform_profile(n);

        group.bench_with_input(BenchmarkId::new("uniform", n), &participants, |b, participants| {
            let matcher = StableMatcher::default();
            b.iter(|| black_box(matcher.run(participants)))
        });
    }

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(benches, bench_full_run, bench_stages, bench_worst_case);

criterion_main!(benches);
