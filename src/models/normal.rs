//! Standard normal cumulative distribution function.

use std::f64::consts::FRAC_1_SQRT_2;

/// Φ(x), the probability that a standard normal variable is ≤ x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalCdf;

impl NormalCdf {
    pub fn cdf(&self, x: f64) -> f64 {
        norm_cdf(x)
    }
}

/// Φ(x) = 0.5 * erfc(-x / sqrt(2))
///
/// Written in terms of `erfc` rather than `1 + erf` so the lower tail keeps
/// full relative precision instead of cancelling to zero around x = -8.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
}
