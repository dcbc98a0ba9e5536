//! Turning user input into a sequence of numbers

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parse comma-separated text, keeping only tokens that are finite numbers
///
/// Tokens are trimmed; empty tokens and anything that is not a finite `f64`
/// are discarded rather than reported.
pub fn parse_sequence(text: &str) -> Vec<f64> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .collect()
}

/// Reproducible whole-number sequence in `1..=max`
pub fn random_sequence(len: usize, max: u32, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let upper = max.max(1);
    (0..len)
        .map(|_| f64::from(rng.random_range(1..=upper)))
        .collect()
}
