//! Reference-use-case constants and driver defaults.
//!
//! The library itself is generic over the trial count D; these values only
//! pin down the canonical use case (a 365-day year) and the defaults the
//! `rain` driver starts from.

/// Trials in the reference experiment: days in a (non-leap) year.
pub const DAYS_PER_YEAR: usize = 365;

/// Default rainy-day threshold for the `rain` driver: P(S > 188).
pub const DEFAULT_THRESHOLD: i64 = 188;

/// Default number of Monte Carlo replications for the cross-check.
pub const DEFAULT_SIMULATIONS: usize = 5000;

/// Default RNG seed shared by probability generation and simulation.
pub const DEFAULT_SEED: u64 = 42;

/// Default input file for the `topwords` driver.
pub const DEFAULT_CORPUS: &str = "shakespeare.txt";

/// Default number of words the `topwords` driver reports.
pub const DEFAULT_TOP_N: usize = 20;
