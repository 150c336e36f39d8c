//! Standard-normal primitives: CDF, survival function, quantile.

use ab_core::{Error, Result};

/// `1 / sqrt(2π)`.
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal CDF at `x`.
///
/// Uses erfc for better numerical behavior in the tails:
/// `Φ(x) = 0.5 * erfc(-x / sqrt(2))`.
#[inline]
pub fn cdf(x: f64) -> f64 {
    0.5 * statrs::function::erf::erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal density at `x`.
#[inline]
pub fn pdf(x: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Survival probability `P(X > x)` for `X ~ N(mean, stddev²)`.
pub fn sf(x: f64, mean: f64, stddev: f64) -> Result<f64> {
    check_scale(stddev)?;
    // Φ(-z) rather than 1 - Φ(z): keeps precision in the upper tail.
    Ok(cdf(-(x - mean) / stddev))
}

/// Quantile (inverse CDF) of `N(mean, stddev²)` at probability `p`.
pub fn quantile(p: f64, mean: f64, stddev: f64) -> Result<f64> {
    check_scale(stddev)?;
    if !(p > 0.0 && p < 1.0) {
        return Err(Error::Domain(format!("quantile probability must be in (0, 1), got {p}")));
    }
    Ok(mean + stddev * std_quantile(p))
}

/// Quantiles at an ordered pair of probabilities (credible-interval bounds).
pub fn quantile_pair(p: [f64; 2], mean: f64, stddev: f64) -> Result<[f64; 2]> {
    Ok([quantile(p[0], mean, stddev)?, quantile(p[1], mean, stddev)?])
}

/// Standard normal quantile via statrs.
fn std_quantile(p: f64) -> f64 {
    use statrs::distribution::{ContinuousCDF, Normal};
    Normal::new(0.0, 1.0).unwrap().inverse_cdf(p)
}

fn check_scale(stddev: f64) -> Result<()> {
    if !stddev.is_finite() || stddev <= 0.0 {
        return Err(Error::Domain(format!("stddev must be finite and > 0, got {stddev}")));
    }
    Ok(())
}
