//! Uplift engine: difference statistics on the log scale.
//!
//! Both metric families reduce each arm to log-space moments; the
//! difference of independent arms is treated as
//! `ln(X_b) − ln(X_a) ~ N(mean_diff, std_diff²)`, so the relative
//! uplift `X_b/X_a − 1` is lognormal and every derived scalar comes
//! from normal primitives plus a back-transform.

use ab_core::{Error, LogMoments, Result, Uplift};
use ab_prob::normal;

/// Derived uplift statistics for one pair of arms.
#[derive(Debug, Clone)]
pub struct UpliftSummary {
    /// Mean of the log-difference `ln(X_b) − ln(X_a)`.
    pub mean_diff: f64,
    /// Standard deviation of the log-difference.
    pub std_diff: f64,
    /// Posterior probability the log-difference exceeds zero.
    pub chance_to_win: f64,
    /// Median-based relative uplift, `exp(mean_diff) − 1`.
    pub expected: f64,
    /// `(1 − ccr)` credible interval on the relative uplift.
    pub ci: [f64; 2],
}

impl UpliftSummary {
    /// Log-space distribution parameters for downstream consumers.
    pub fn descriptor(&self) -> Uplift {
        Uplift { dist: "lognormal".to_string(), mean: self.mean_diff, stddev: self.std_diff }
    }
}

/// Compute uplift statistics from two arms' log-space moments.
///
/// `ccr` is the complement of the credible level (0.05 gives a 95%
/// interval) and must lie in `(0, 1)`. Fails with a domain error when
/// the combined log-space spread is not finite and positive, which
/// indicates degenerate posteriors upstream.
pub fn uplift(arm_a: &LogMoments, arm_b: &LogMoments, ccr: f64) -> Result<UpliftSummary> {
    if !(ccr > 0.0 && ccr < 1.0) {
        return Err(Error::Validation(format!("ccr must be in (0, 1), got {ccr}")));
    }
    let mean_diff = arm_b.mean - arm_a.mean;
    let std_diff = (arm_a.var + arm_b.var).sqrt();
    if !std_diff.is_finite() || std_diff <= 0.0 {
        return Err(Error::Domain(format!(
            "log-difference spread must be finite and > 0, got {std_diff}"
        )));
    }

    let chance_to_win = normal::sf(0.0, mean_diff, std_diff)?;
    let expected = mean_diff.exp() - 1.0;
    let q = normal::quantile_pair([ccr / 2.0, 1.0 - ccr / 2.0], mean_diff, std_diff)?;
    let ci = [q[0].exp() - 1.0, q[1].exp() - 1.0];

    Ok(UpliftSummary { mean_diff, std_diff, chance_to_win, expected, ci })
}
