//! Simulation engine — replays the D-trial year N times.
//!
//! Each replication draws every trial independently: trial i succeeds iff a
//! uniform draw in [0,1) falls below p\[i\]. Replications are fanned out
//! across the rayon pool; replication i seeds its own PRNG with
//! `seed.wrapping_add(i)`, so a batch is reproducible for a fixed seed and
//! independent of thread scheduling.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;

/// Results of a batch simulation.
pub struct SimulationResult {
    /// Per-replication success counts, sorted ascending.
    pub counts: Vec<u32>,
    pub mean: f64,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
    pub median: u32,
    pub elapsed: std::time::Duration,
}

/// Simulate one year: draw each trial once, return the success count.
pub fn simulate_year(p: &[f64], rng: &mut SmallRng) -> u32 {
    let mut rainy = 0u32;
    for &pi in p {
        if rng.gen::<f64>() < pi {
            rainy += 1;
        }
    }
    rainy
}

/// Simulate N years in parallel, returning counts plus aggregate statistics.
pub fn simulate_batch(p: &[f64], num_years: usize, seed: u64) -> SimulationResult {
    let start = Instant::now();

    let mut counts: Vec<u32> = (0..num_years)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            simulate_year(p, &mut rng)
        })
        .collect();

    let elapsed = start.elapsed();

    let n = num_years.max(1) as f64;
    let sum: f64 = counts.iter().map(|&c| c as f64).sum();
    let mean = sum / n;
    let variance: f64 = counts
        .iter()
        .map(|&c| (c as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();
    let min = *counts.iter().min().unwrap_or(&0);
    let max = *counts.iter().max().unwrap_or(&0);

    counts.sort_unstable();
    let median = counts.get(num_years / 2).copied().unwrap_or(0);

    SimulationResult {
        counts,
        mean,
        std_dev,
        min,
        max,
        median,
        elapsed,
    }
}

/// Fraction of replications whose success count exceeds `n`.
///
/// This is the Monte Carlo estimate of P(S > n), with standard error
/// sqrt(q(1-q)/N) around the true value.
pub fn tail_estimate(result: &SimulationResult, n: i64) -> f64 {
    if result.counts.is_empty() {
        return 0.0;
    }
    let exceeding = result
        .counts
        .iter()
        .filter(|&&c| (c as i64) > n)
        .count();
    exceeding as f64 / result.counts.len() as f64
}
