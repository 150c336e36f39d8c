//! Common data types for the abstat engine.

use serde::{Deserialize, Serialize};

/// Mean and variance of the log of an arm's underlying rate or mean.
///
/// Produced by a conjugate family's `log_moments` and consumed by the
/// uplift engine; `var` is always `>= 0` for a well-formed posterior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogMoments {
    /// `E[ln X]` for the arm's posterior quantity `X`.
    pub mean: f64,
    /// `Var[ln X]` for the arm's posterior quantity `X`.
    pub var: f64,
}

/// Log-space parameters of the uplift distribution, returned for
/// downstream consumers that need the raw distribution rather than the
/// derived scalars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Uplift {
    /// Distribution family; always `"lognormal"`.
    pub dist: String,
    /// Mean of the log-difference `ln(X_b) - ln(X_a)`.
    pub mean: f64,
    /// Standard deviation of the log-difference.
    pub stddev: f64,
}

/// Decision-support bundle for one A/B test invocation.
///
/// Serializes to the JSON object the CLI prints: `chance_to_win`,
/// `expected`, `ci`, `uplift`, `risk`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// Posterior probability that arm B's true rate/mean exceeds arm A's.
    pub chance_to_win: f64,
    /// Expected relative uplift of B over A (median-based, `> -1`).
    pub expected: f64,
    /// Credible interval `[low, high]` on the relative uplift.
    pub ci: [f64; 2],
    /// Log-space uplift distribution parameters.
    pub uplift: Uplift,
    /// Expected loss `[risk_a, risk_b]` of wrongly picking each arm, both `>= 0`.
    pub risk: [f64; 2],
}
