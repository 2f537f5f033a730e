//! Benchmarks for the minimization pipeline.
//!
//! Functions are generated from a fixed seed, so every run measures the same inputs.
//!
//! Run with:
//! ```bash
//! cargo bench --bench minimize
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use qmc_rs::combine::prime_implicants;
use qmc_rs::minimize::minimize;

/// Generate a deterministic random function with roughly `density` of the rows true.
fn random_minterms(seed: u64, num_vars: usize, density: f64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..1u32 << num_vars).filter(|_| rng.random_bool(density)).collect()
}

// ============================================================================
// Benchmark: Prime implicant generation
// ============================================================================

fn bench_prime_implicants(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine/primes");

    for num_vars in [4, 6, 8, 10] {
        let minterms = random_minterms(42, num_vars, 0.5);
        group.throughput(Throughput::Elements(minterms.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(num_vars), &minterms, |b, minterms| {
            b.iter(|| prime_implicants(std::hint::black_box(minterms), num_vars))
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Full pipeline
// ============================================================================

fn bench_minimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");

    for num_vars in [4, 6, 8, 10] {
        for density in [0.25, 0.75] {
            let minterms = random_minterms(7, num_vars, density);
            let id = format!("{}vars/{}", num_vars, density);
            group.bench_with_input(BenchmarkId::from_parameter(id), &minterms, |b, minterms| {
                b.iter(|| {
                    minimize(num_vars, minterms.iter().copied())
                        .map(|m| m.minimal_cover_indices().len())
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_prime_implicants, bench_minimize);
criterion_main!(benches);
