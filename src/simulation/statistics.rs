//! Statistics aggregation from simulated years.
//!
//! Packages a cross-check run — exact value, Monte Carlo estimate, and the
//! distribution of simulated success counts — into serializable structs for
//! the `rain` driver's optional JSON dump.

use serde::Serialize;
use std::collections::BTreeMap;

use super::engine::{tail_estimate, SimulationResult};

// ── Top-level statistics ────────────────────────────────────────────

#[derive(Serialize)]
pub struct CrossCheckStatistics {
    pub num_simulations: u64,
    pub seed: u64,
    pub threshold: i64,
    pub exact_probability: f64,
    pub monte_carlo_estimate: f64,
    /// sqrt(q(1-q)/N) around the estimate.
    pub std_error: f64,
    /// (estimate - exact) / std_error; 0.0 when the estimate is degenerate.
    pub z_score: f64,
    pub rainy_days: CountDistribution,
}

// ── Success-count distribution ──────────────────────────────────────

#[derive(Serialize)]
pub struct CountDistribution {
    pub mean: f64,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
    pub median: u32,
    /// Sparse distribution: only counts that actually occur.
    pub distribution: BTreeMap<u32, f64>,
}

// ── Aggregation ─────────────────────────────────────────────────────

/// Aggregate a batch into the serializable cross-check summary.
pub fn aggregate_statistics(
    result: &SimulationResult,
    threshold: i64,
    exact_probability: f64,
    seed: u64,
) -> CrossCheckStatistics {
    let n = result.counts.len().max(1) as f64;
    let estimate = tail_estimate(result, threshold);
    let std_error = (estimate * (1.0 - estimate) / n).sqrt();
    let z_score = if std_error > 0.0 {
        (estimate - exact_probability) / std_error
    } else {
        0.0
    };

    let mut count_freq: BTreeMap<u32, u64> = BTreeMap::new();
    for &c in &result.counts {
        *count_freq.entry(c).or_insert(0) += 1;
    }
    let distribution: BTreeMap<u32, f64> = count_freq
        .into_iter()
        .map(|(c, freq)| (c, freq as f64 / n))
        .collect();

    CrossCheckStatistics {
        num_simulations: result.counts.len() as u64,
        seed,
        threshold,
        exact_probability,
        monte_carlo_estimate: estimate,
        std_error,
        z_score,
        rainy_days: CountDistribution {
            mean: result.mean,
            std_dev: result.std_dev,
            min: result.min,
            max: result.max,
            median: result.median,
            distribution,
        },
    }
}

/// Save aggregated statistics as JSON.
pub fn save_statistics(stats: &CrossCheckStatistics, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(stats).expect("Failed to serialize statistics");
    std::fs::write(path, json).expect("Failed to write statistics file");
}
