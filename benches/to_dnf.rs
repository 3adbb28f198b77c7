//! LPB compilation and ranking benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench to_dnf
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lpb_rs::dnf::Dnf;
use lpb_rs::lpb::Lpb;
use lpb_rs::setting::VariableSetting;
use lpb_rs::tree::TreeContext;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// Helper: Random LPBs
// ============================================================================

/// Build a random LPB with `n` coefficients whose threshold is half the total weight.
fn random_lpb(n: usize, seed: u64) -> Lpb<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut coefficients: Vec<u64> = (0..n).map(|_| rng.random_range(1..=100)).collect();
    coefficients.sort_unstable_by(|a, b| b.cmp(a));
    let threshold = coefficients.iter().sum::<u64>() / 2;
    Lpb::new(threshold, coefficients)
}

/// The majority function on `n` variables.
fn majority(n: usize) -> Lpb<u64> {
    Lpb::new(n as u64 / 2 + 1, vec![1; n])
}

// ============================================================================
// Benchmark: Compilation
// ============================================================================

fn bench_to_dnf_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("lpb/to_dnf_random");

    for n in [6, 8, 10, 12] {
        let lpb = random_lpb(n, 42);
        group.throughput(Throughput::Elements(lpb.to_dnf().len() as u64));
        group.bench_with_input(BenchmarkId::new("n", n), &lpb, |b, lpb| {
            b.iter(|| lpb.to_dnf());
        });
    }

    group.finish();
}

fn bench_to_dnf_majority(c: &mut Criterion) {
    let mut group = c.benchmark_group("lpb/to_dnf_majority");
    group.sample_size(10); // The number of clauses grows quickly

    for n in [5, 7, 9, 11] {
        let lpb = majority(n);
        group.bench_with_input(BenchmarkId::new("n", n), &lpb, |b, lpb| {
            b.iter(|| lpb.to_dnf());
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Ranking and splitting
// ============================================================================

fn bench_variable_setting(c: &mut Criterion) {
    let mut group = c.benchmark_group("lpb/variable_setting");

    for n in [8, 10, 12] {
        let dnf: Dnf = random_lpb(n, 7).to_dnf();
        group.bench_with_input(BenchmarkId::new("n", n), &dnf, |b, dnf| {
            b.iter(|| VariableSetting::new(dnf));
        });
    }

    group.finish();
}

fn bench_split_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("lpb/split_root");

    for n in [8, 10, 12] {
        let dnf = random_lpb(n, 13).to_dnf();
        group.bench_with_input(BenchmarkId::new("n", n), &dnf, |b, dnf| {
            b.iter(|| {
                let (mut ctx, root) = TreeContext::with_main(dnf.clone());
                ctx.split(root).map(|_| ctx.node_count())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_to_dnf_random,
    bench_to_dnf_majority,
    bench_variable_setting,
    bench_split_root,
);

criterion_main!(benches);
