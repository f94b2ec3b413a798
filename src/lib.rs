//! # Rainwords — Poisson-binomial tail probabilities and top-N word frequencies
//!
//! Two self-contained batch computations behind thin CLI drivers:
//!
//! | Component | Rust module | Description |
//! |-----------|-------------|-------------|
//! | Rain calculator | [`poisson_binomial`] | Exact P(more than n rainy days) for a year of independent per-day rain probabilities, via the direct-convolution pmf recurrence |
//! | Cross-check | [`simulation`] | Monte Carlo estimate of the same tail probability (statistical verification, never authoritative) |
//! | Word counter | [`word_frequency`] | The N most frequent words in a text stream, apostrophe-aware and case-folded |
//!
//! ## Algorithm overview
//!
//! The rain calculator models the number of rainy days S as a **Poisson
//! binomial** variable: a sum of D independent Bernoulli trials with
//! per-trial probabilities p\[0..D\]. Its pmf is built by folding trials in
//! one at a time with the convolution recurrence
//!
//! ```text
//! pmf[k] := p[i] * pmf[k-1] + (1 - p[i]) * pmf[k]    (k descending)
//! ```
//!
//! after which `P(S > n) = sum(pmf[n+1..=D])`. All arithmetic is f64: at
//! D ≈ 365 the accumulated f32 rounding is visible in the fourth digit.
//!
//! The word counter is a single streaming pass: tokenize bytes into
//! case-folded words (apostrophes allowed anywhere but the first position),
//! count them in a hash map, then sort by descending count with a
//! deterministic tie-break (lexicographic ascending).
//!
//! Neither component shares state with the other; each call owns its
//! working storage and releases it on return.

pub mod constants;
pub mod env_config;
pub mod error;
pub mod poisson_binomial;
pub mod simulation;
pub mod word_frequency;
