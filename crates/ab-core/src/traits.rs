//! Core traits for the abstat engine.
//!
//! The two conjugate families (Beta-Binomial, Normal) are expressed as
//! implementations of one capability trait so the uplift engine and the
//! test drivers are written once and parametrized by model, rather than
//! duplicated per family.

use crate::types::LogMoments;
use crate::Result;

/// A conjugate prior/posterior family for one metric kind.
///
/// Implementors provide the three operations the decision pipeline
/// needs: the conjugate posterior update, exact or approximate
/// log-space moments of the posterior quantity, and the expected loss
/// of picking the wrong arm, computed on the untransformed posteriors.
pub trait ConjugateModel {
    /// Immutable prior configuration.
    type Prior;
    /// Observed summary statistics for one arm.
    type Summary;
    /// Updated belief for one arm.
    type Posterior;

    /// Combine prior and sample into the posterior for one arm.
    fn posterior(prior: &Self::Prior, sample: &Self::Summary) -> Result<Self::Posterior>;

    /// Mean and variance of the log of the arm's underlying quantity.
    fn log_moments(posterior: &Self::Posterior) -> Result<LogMoments>;

    /// Expected loss `(risk_a, risk_b)` of choosing arm A when B is
    /// truly better, and vice versa. Deterministic: closed form or
    /// fixed-grid quadrature, never Monte Carlo.
    fn risk(a: &Self::Posterior, b: &Self::Posterior) -> Result<(f64, f64)>;
}
