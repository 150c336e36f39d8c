//! Beta-Binomial conjugate family.

use std::sync::OnceLock;

use ab_core::{ConjugateModel, Error, LogMoments, Result};
use statrs::function::beta::beta_reg;
use statrs::function::gamma::digamma;

use crate::math::{gauss_legendre, integrate_with, trigamma};

/// Quadrature resolution for the risk integral. Fixed so repeated runs
/// are bit-identical.
const RISK_PANELS: usize = 64;
const RISK_ORDER: usize = 16;

/// How many posterior standard deviations the risk bracket extends past
/// each arm's mean. Beyond 12σ the integrand is below 1e-20.
const BRACKET_SIGMAS: f64 = 12.0;

/// Gauss-Legendre rule for `RISK_ORDER`, solved once per process.
fn risk_rule() -> &'static (Vec<f64>, Vec<f64>) {
    static RULE: OnceLock<(Vec<f64>, Vec<f64>)> = OnceLock::new();
    RULE.get_or_init(|| gauss_legendre(RISK_ORDER))
}

/// Pseudo-successes and pseudo-failures of the Beta prior.
#[derive(Debug, Clone, Copy)]
pub struct BetaPrior {
    /// Prior pseudo-successes (`alpha0 > 0`).
    pub alpha: f64,
    /// Prior pseudo-failures (`beta0 > 0`).
    pub beta: f64,
}

impl Default for BetaPrior {
    /// Uniform prior `Beta(1, 1)`.
    fn default() -> Self {
        Self { alpha: 1.0, beta: 1.0 }
    }
}

/// Observed binomial data for one arm.
#[derive(Debug, Clone, Copy)]
pub struct BinomialSummary {
    /// Number of successes (`0 <= successes <= trials`).
    pub successes: u64,
    /// Number of trials (`> 0`).
    pub trials: u64,
}

/// Updated Beta belief for one arm's conversion rate.
#[derive(Debug, Clone, Copy)]
pub struct BetaPosterior {
    /// Posterior shape `alpha > 0`.
    pub alpha: f64,
    /// Posterior shape `beta > 0`.
    pub beta: f64,
}

impl BetaPosterior {
    /// Posterior mean `alpha / (alpha + beta)`.
    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    /// Posterior standard deviation.
    pub fn stddev(&self) -> f64 {
        let s = self.alpha + self.beta;
        (self.alpha * self.beta / (s * s * (s + 1.0))).sqrt()
    }

    /// CDF `P(X <= t)` via the regularized incomplete beta function.
    pub fn cdf(&self, t: f64) -> f64 {
        if t <= 0.0 {
            0.0
        } else if t >= 1.0 {
            1.0
        } else {
            beta_reg(self.alpha, self.beta, t)
        }
    }
}

/// The Beta-Binomial family (conversion-rate metrics).
pub struct BetaBinomial;

impl ConjugateModel for BetaBinomial {
    type Prior = BetaPrior;
    type Summary = BinomialSummary;
    type Posterior = BetaPosterior;

    /// `alpha = alpha0 + x`, `beta = beta0 + (n - x)`.
    fn posterior(prior: &BetaPrior, sample: &BinomialSummary) -> Result<BetaPosterior> {
        let alpha = prior.alpha + sample.successes as f64;
        let beta = prior.beta + (sample.trials as f64 - sample.successes as f64);
        if !(alpha > 0.0 && beta > 0.0) {
            return Err(Error::Domain(format!(
                "posterior shape must be > 0, got alpha={alpha}, beta={beta}"
            )));
        }
        Ok(BetaPosterior { alpha, beta })
    }

    /// Exact log-space moments of a Beta-distributed rate:
    /// `E[ln X] = ψ(α) − ψ(α+β)`, `Var[ln X] = ψ'(α) − ψ'(α+β)`.
    fn log_moments(posterior: &BetaPosterior) -> Result<LogMoments> {
        let (alpha, beta) = (posterior.alpha, posterior.beta);
        if !(alpha > 0.0 && beta > 0.0) {
            return Err(Error::Domain(format!(
                "log moments require alpha > 0 and beta > 0, got alpha={alpha}, beta={beta}"
            )));
        }
        Ok(LogMoments {
            mean: digamma(alpha) - digamma(alpha + beta),
            var: trigamma(alpha) - trigamma(alpha + beta),
        })
    }

    /// Expected loss between two independent Beta posteriors.
    ///
    /// Uses the layered representation of the positive part:
    /// `E[max(X_b − X_a, 0)] = ∫ F_a(t) (1 − F_b(t)) dt`,
    /// integrated with composite Gauss-Legendre quadrature over a
    /// bracket covering both posteriors' ±12σ ranges. Deterministic
    /// and accurate well past 1e-9 for posteriors arising from real
    /// experiment counts.
    fn risk(a: &BetaPosterior, b: &BetaPosterior) -> Result<(f64, f64)> {
        let lo = (a.mean() - BRACKET_SIGMAS * a.stddev())
            .min(b.mean() - BRACKET_SIGMAS * b.stddev())
            .max(0.0);
        let hi = (a.mean() + BRACKET_SIGMAS * a.stddev())
            .max(b.mean() + BRACKET_SIGMAS * b.stddev())
            .min(1.0);

        let (nodes, weights) = risk_rule();
        let risk_a =
            integrate_with(|t| a.cdf(t) * (1.0 - b.cdf(t)), lo, hi, RISK_PANELS, nodes, weights);
        let risk_b =
            integrate_with(|t| b.cdf(t) * (1.0 - a.cdf(t)), lo, hi, RISK_PANELS, nodes, weights);
        Ok((risk_a.max(0.0), risk_b.max(0.0)))
    }
}
