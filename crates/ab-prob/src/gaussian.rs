//! Normal conjugate family for continuous metric means.

use ab_core::{ConjugateModel, Error, LogMoments, Result};

use crate::normal::{cdf, pdf};

/// Weighted Normal prior, expressed as if it were itself a summary
/// from `pseudo_n` pseudo-observations.
#[derive(Debug, Clone, Copy)]
pub struct GaussianPrior {
    /// Prior mean.
    pub mean: f64,
    /// Prior standard deviation (`> 0`).
    pub stddev: f64,
    /// Prior pseudo-sample-size (`>= 0`; 0 makes the prior uninformative).
    pub pseudo_n: f64,
}

impl Default for GaussianPrior {
    /// Effectively uninformative prior `(0, 1, 0)`.
    fn default() -> Self {
        Self { mean: 0.0, stddev: 1.0, pseudo_n: 0.0 }
    }
}

/// Observed Gaussian summary for one arm.
#[derive(Debug, Clone, Copy)]
pub struct GaussianSummary {
    /// Sample mean.
    pub mean: f64,
    /// Sample standard deviation (`>= 0`).
    pub stddev: f64,
    /// Sample size (`> 0`).
    pub n: u64,
}

/// Updated Normal belief for one arm's metric mean.
#[derive(Debug, Clone, Copy)]
pub struct GaussianPosterior {
    /// Posterior mean of the metric mean.
    pub mean: f64,
    /// Posterior standard deviation (`> 0`).
    pub stddev: f64,
}

/// The Normal family (continuous metrics summarized by mean/stddev/n).
pub struct Gaussian;

impl ConjugateModel for Gaussian {
    type Prior = GaussianPrior;
    type Summary = GaussianSummary;
    type Posterior = GaussianPosterior;

    /// Precision-weighted combination of prior and sample.
    ///
    /// Weights are `n0/σ0²` for the prior and `n/s²` for the sample, so
    /// the posterior shrinks toward the prior as `n0` grows and toward
    /// the sample as `n` dominates. With the default prior (`n0 = 0`)
    /// this degenerates to the standard-error-scaled estimate
    /// `(m, s/√n)`.
    fn posterior(prior: &GaussianPrior, sample: &GaussianSummary) -> Result<GaussianPosterior> {
        let w_prior = prior.pseudo_n / (prior.stddev * prior.stddev);
        let w_sample = sample.n as f64 / (sample.stddev * sample.stddev);
        let precision = w_prior + w_sample;
        if !precision.is_finite() || precision <= 0.0 {
            return Err(Error::Domain(format!(
                "posterior precision must be finite and > 0, got {precision}"
            )));
        }
        let mean = (w_prior * prior.mean + w_sample * sample.mean) / precision;
        let stddev = (1.0 / precision).sqrt();
        if !stddev.is_finite() || stddev <= 0.0 {
            return Err(Error::Domain(format!(
                "posterior stddev must be finite and > 0, got {stddev}"
            )));
        }
        Ok(GaussianPosterior { mean, stddev })
    }

    /// Delta-method log-space moments of a quantity assumed
    /// `N(mu, sigma²)` and strictly positive:
    /// `E[ln X] ≈ ln(mu) − σ²/(2mu²)`, `Var[ln X] ≈ σ²/mu²`.
    ///
    /// Exact only in the small coefficient-of-variation limit; `mu <= 0`
    /// has no log-scale representation and is rejected.
    fn log_moments(posterior: &GaussianPosterior) -> Result<LogMoments> {
        let (mu, sigma) = (posterior.mean, posterior.stddev);
        if !mu.is_finite() || mu <= 0.0 {
            return Err(Error::Domain(format!(
                "log-space moments require a positive mean, got {mu}"
            )));
        }
        let cv2 = sigma * sigma / (mu * mu);
        Ok(LogMoments { mean: mu.ln() - cv2 / 2.0, var: cv2 })
    }

    /// Closed-form expected loss for two independent Normal posteriors.
    ///
    /// With `D = X_b − X_a ~ N(md, sd²)`:
    /// `E[max(D, 0)] = sd·φ(md/sd) + md·Φ(md/sd)` and symmetrically
    /// `E[max(−D, 0)] = sd·φ(md/sd) − md·Φ(−md/sd)`.
    fn risk(a: &GaussianPosterior, b: &GaussianPosterior) -> Result<(f64, f64)> {
        let md = b.mean - a.mean;
        let sd = (a.stddev * a.stddev + b.stddev * b.stddev).sqrt();
        if !sd.is_finite() || sd <= 0.0 {
            return Err(Error::Domain(format!(
                "risk requires a finite positive difference scale, got {sd}"
            )));
        }
        let z = md / sd;
        let risk_a = sd * pdf(z) + md * cdf(z);
        let risk_b = sd * pdf(z) - md * cdf(-z);
        Ok((risk_a.max(0.0), risk_b.max(0.0)))
    }
}
