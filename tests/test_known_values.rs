//! Hand-computed exact values and end-to-end driver-path cases.

use rainwords::error::CountError;
use rainwords::poisson_binomial::{probability_mass, tail_probability};
use rainwords::simulation::{simulate_batch, tail_estimate};
use rainwords::word_frequency::{top_n_words, top_n_words_in_file};

const TOL: f64 = 1e-12;

// ── Rain calculator ─────────────────────────────────────────────────

#[test]
fn two_fair_coins() {
    let p = [0.5, 0.5];
    let pmf = probability_mass(&p);
    assert!((pmf[0] - 0.25).abs() < TOL);
    assert!((pmf[1] - 0.5).abs() < TOL);
    assert!((pmf[2] - 0.25).abs() < TOL);
    assert!((tail_probability(&p, 0) - 0.75).abs() < TOL);
    assert!((tail_probability(&p, 1) - 0.25).abs() < TOL);
}

#[test]
fn asymmetric_three_days() {
    // p = [0.1, 0.5, 0.9], enumerated by hand over the 8 outcomes:
    // P(0) = 0.9*0.5*0.1                               = 0.045
    // P(1) = 0.1*0.5*0.1 + 0.9*0.5*0.1 + 0.9*0.5*0.9   = 0.455
    // P(2) = 0.1*0.5*0.1 + 0.1*0.5*0.9 + 0.9*0.5*0.9   = 0.455
    // P(3) = 0.1*0.5*0.9                               = 0.045
    let p = [0.1, 0.5, 0.9];
    let pmf = probability_mass(&p);
    assert!((pmf[0] - 0.045).abs() < TOL);
    assert!((pmf[1] - 0.455).abs() < TOL);
    assert!((pmf[2] - 0.455).abs() < TOL);
    assert!((pmf[3] - 0.045).abs() < TOL);
    assert!((tail_probability(&p, 0) - 0.955).abs() < TOL);
    assert!((tail_probability(&p, 1) - 0.5).abs() < TOL);
    assert!((tail_probability(&p, 2) - 0.045).abs() < TOL);
}

#[test]
fn never_rains_full_year() {
    let p = [0.0; 365];
    for n in 0..365 {
        assert_eq!(tail_probability(&p, n), 0.0);
    }
    assert_eq!(tail_probability(&p, -1), 1.0);
}

#[test]
fn always_rains_full_year() {
    let p = [1.0; 365];
    for n in 0..365 {
        assert!((tail_probability(&p, n) - 1.0).abs() < TOL);
    }
    assert_eq!(tail_probability(&p, 365), 0.0);
    assert_eq!(tail_probability(&p, 400), 0.0);
}

#[test]
fn full_year_pmf_is_a_distribution() {
    let p: Vec<f64> = (0..365).map(|i| ((i as f64) * 0.618_033_99).fract()).collect();
    let pmf = probability_mass(&p);
    let sum: f64 = pmf.iter().sum();
    assert!((sum - 1.0).abs() < 1e-10, "pmf sum = {}", sum);
    assert!(pmf.iter().all(|&m| m >= 0.0));
}

// ── Monte Carlo cross-check ─────────────────────────────────────────

#[test]
fn monte_carlo_agrees_with_exact_binomial() {
    // B(50, 0.5), threshold 25. 20k replications give std error ~0.0035,
    // so 0.02 is a >5-sigma tolerance.
    let p = [0.5; 50];
    let exact = tail_probability(&p, 25);
    let result = simulate_batch(&p, 20_000, 42);
    let estimate = tail_estimate(&result, 25);
    assert!(
        (estimate - exact).abs() < 0.02,
        "estimate {} vs exact {}",
        estimate,
        exact
    );
}

#[test]
fn monte_carlo_agrees_with_exact_full_year() {
    let p: Vec<f64> = (0..365).map(|i| ((i as f64) * 0.37).fract()).collect();
    let mean: f64 = p.iter().sum();
    let threshold = mean as i64; // near the distribution center, worst case for MC
    let exact = tail_probability(&p, threshold);
    let result = simulate_batch(&p, 20_000, 42);
    let estimate = tail_estimate(&result, threshold);
    assert!(
        (estimate - exact).abs() < 0.02,
        "estimate {} vs exact {}",
        estimate,
        exact
    );
}

// ── Word counter ────────────────────────────────────────────────────

#[test]
fn rain_rhyme_counts() {
    let text = "Rain, rain, go away! Don't come again.";
    let top = top_n_words(text.as_bytes(), 3).unwrap();
    assert_eq!(top[0].word, "rain");
    assert_eq!(top[0].count, 2);
    assert!(top.iter().skip(1).all(|w| w.count == 1));

    let all = top_n_words(text.as_bytes(), 10).unwrap();
    assert_eq!(all.len(), 6); // rain, again, away, come, don't, go
    assert!(all.iter().any(|w| w.word == "don't"));
}

#[test]
fn punctuation_and_digits_yield_nothing() {
    let top = top_n_words("12 34?! ... ;;; 5,6".as_bytes(), 8).unwrap();
    assert!(top.is_empty());
}

#[test]
fn n_beyond_distinct_words_returns_all() {
    let top = top_n_words("one two two three three three".as_bytes(), 99).unwrap();
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].word, "three");
    assert_eq!(top[0].count, 3);
    assert_eq!(top[2].word, "one");
}

#[test]
fn repeated_runs_are_identical() {
    let text = "to be or not to be that is the question";
    let a = top_n_words(text.as_bytes(), 5).unwrap();
    let b = top_n_words(text.as_bytes(), 5).unwrap();
    assert_eq!(a, b);
    // Tie between "be" and "to" (2 each) resolves lexicographically
    assert_eq!(a[0].word, "be");
    assert_eq!(a[1].word, "to");
}

#[test]
fn reads_corpus_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corpus.txt");
    std::fs::write(&path, "The cat and the dog and the bird").unwrap();

    let top = top_n_words_in_file(&path, 2).unwrap();
    assert_eq!(top[0].word, "the");
    assert_eq!(top[0].count, 3);
    assert_eq!(top[1].word, "and");
    assert_eq!(top[1].count, 2);
}

#[test]
fn missing_file_fails_without_partial_result() {
    let err = top_n_words_in_file("/no/such/shakespeare.txt", 5).unwrap_err();
    assert!(matches!(err, CountError::InputUnavailable { .. }));
}

#[test]
fn zero_n_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corpus.txt");
    std::fs::write(&path, "some words").unwrap();

    let err = top_n_words_in_file(&path, 0).unwrap_err();
    assert!(matches!(err, CountError::InvalidArgument(_)));
}
