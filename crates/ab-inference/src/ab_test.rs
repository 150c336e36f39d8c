//! Test drivers: posterior update, log-moment conversion, uplift, and
//! risk, assembled into one `TestResult` per metric family.

use ab_core::{ConjugateModel, Error, Result, TestResult};
use ab_prob::{
    BetaBinomial, BetaPrior, BinomialSummary, Gaussian, GaussianPrior, GaussianSummary,
};

use crate::uplift;

/// Default complement of the credible level (95% interval).
pub const DEFAULT_CCR: f64 = 0.05;

/// Run the full decision pipeline for any conjugate family.
///
/// Posterior update per arm, log-space moments, uplift statistics, and
/// expected loss computed on the untransformed posteriors.
pub fn ab_test<M: ConjugateModel>(
    prior: &M::Prior,
    sample_a: &M::Summary,
    sample_b: &M::Summary,
    ccr: f64,
) -> Result<TestResult> {
    let post_a = M::posterior(prior, sample_a)?;
    let post_b = M::posterior(prior, sample_b)?;

    let moments_a = M::log_moments(&post_a)?;
    let moments_b = M::log_moments(&post_b)?;

    let up = uplift::uplift(&moments_a, &moments_b, ccr)?;
    let (risk_a, risk_b) = M::risk(&post_a, &post_b)?;

    tracing::debug!(
        mean_diff = up.mean_diff,
        std_diff = up.std_diff,
        chance_to_win = up.chance_to_win,
        "uplift computed"
    );

    Ok(TestResult {
        chance_to_win: up.chance_to_win,
        expected: up.expected,
        ci: up.ci,
        uplift: up.descriptor(),
        risk: [risk_a, risk_b],
    })
}

/// Bayesian A/B test for conversion-rate (binomial) metrics.
///
/// Arms are summarized by successes and trials; both arms share the
/// default uniform `Beta(1, 1)` prior.
pub fn binomial_ab_test(x_a: u64, n_a: u64, x_b: u64, n_b: u64, ccr: f64) -> Result<TestResult> {
    validate_binomial_arm("a", x_a, n_a)?;
    validate_binomial_arm("b", x_b, n_b)?;
    ab_test::<BetaBinomial>(
        &BetaPrior::default(),
        &BinomialSummary { successes: x_a, trials: n_a },
        &BinomialSummary { successes: x_b, trials: n_b },
        ccr,
    )
}

/// Bayesian A/B test for continuous (Gaussian-summarized) metrics.
///
/// Arms are summarized by sample mean, stddev, and size; both arms
/// share the default uninformative `(0, 1, 0)` prior.
pub fn gaussian_ab_test(
    m_a: f64,
    s_a: f64,
    n_a: u64,
    m_b: f64,
    s_b: f64,
    n_b: u64,
    ccr: f64,
) -> Result<TestResult> {
    validate_gaussian_arm("a", m_a, s_a, n_a)?;
    validate_gaussian_arm("b", m_b, s_b, n_b)?;
    ab_test::<Gaussian>(
        &GaussianPrior::default(),
        &GaussianSummary { mean: m_a, stddev: s_a, n: n_a },
        &GaussianSummary { mean: m_b, stddev: s_b, n: n_b },
        ccr,
    )
}

fn validate_binomial_arm(arm: &str, successes: u64, trials: u64) -> Result<()> {
    if trials == 0 {
        return Err(Error::Validation(format!("arm {arm}: trials must be > 0")));
    }
    if successes > trials {
        return Err(Error::Validation(format!(
            "arm {arm}: successes ({successes}) exceed trials ({trials})"
        )));
    }
    Ok(())
}

fn validate_gaussian_arm(arm: &str, mean: f64, stddev: f64, n: u64) -> Result<()> {
    if n == 0 {
        return Err(Error::Validation(format!("arm {arm}: sample size must be > 0")));
    }
    if !mean.is_finite() {
        return Err(Error::Validation(format!("arm {arm}: mean must be finite, got {mean}")));
    }
    if !stddev.is_finite() || stddev < 0.0 {
        return Err(Error::Validation(format!(
            "arm {arm}: stddev must be finite and >= 0, got {stddev}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_rejects_bad_summaries() {
        assert!(binomial_ab_test(0, 0, 1, 10, DEFAULT_CCR).is_err());
        assert!(binomial_ab_test(11, 10, 1, 10, DEFAULT_CCR).is_err());
        assert!(binomial_ab_test(1, 10, 5, 4, DEFAULT_CCR).is_err());
    }

    #[test]
    fn test_gaussian_rejects_bad_summaries() {
        assert!(gaussian_ab_test(1.0, 1.0, 0, 1.0, 1.0, 10, DEFAULT_CCR).is_err());
        assert!(gaussian_ab_test(1.0, -0.5, 10, 1.0, 1.0, 10, DEFAULT_CCR).is_err());
        assert!(gaussian_ab_test(f64::NAN, 1.0, 10, 1.0, 1.0, 10, DEFAULT_CCR).is_err());
        assert!(gaussian_ab_test(1.0, f64::INFINITY, 10, 1.0, 1.0, 10, DEFAULT_CCR).is_err());
    }

    #[test]
    fn test_gaussian_zero_stddev_is_domain_error() {
        // s = 0 passes summary validation but yields a degenerate
        // posterior, caught by the engine.
        let r = gaussian_ab_test(1.0, 0.0, 10, 1.0, 1.0, 10, DEFAULT_CCR);
        assert!(matches!(r, Err(ab_core::Error::Domain(_))));
    }

    #[test]
    fn test_gaussian_negative_mean_is_domain_error() {
        // A negative posterior mean has no log-scale representation.
        let r = gaussian_ab_test(-5.0, 1.0, 100, 5.0, 1.0, 100, DEFAULT_CCR);
        assert!(matches!(r, Err(ab_core::Error::Domain(_))));
    }

    #[test]
    fn test_binomial_result_bounds() {
        let r = binomial_ab_test(254, 1283, 289, 1321, DEFAULT_CCR).unwrap();
        assert!(r.chance_to_win >= 0.0 && r.chance_to_win <= 1.0);
        assert!(r.expected > -1.0);
        assert!(r.ci[0] <= r.ci[1]);
        assert!(r.risk[0] >= 0.0 && r.risk[1] >= 0.0);
        assert_eq!(r.uplift.dist, "lognormal");
    }

    #[test]
    fn test_binomial_determinism() {
        let r1 = binomial_ab_test(254, 1283, 289, 1321, DEFAULT_CCR).unwrap();
        let r2 = binomial_ab_test(254, 1283, 289, 1321, DEFAULT_CCR).unwrap();
        assert_eq!(r1.chance_to_win.to_bits(), r2.chance_to_win.to_bits());
        assert_eq!(r1.expected.to_bits(), r2.expected.to_bits());
        assert_eq!(r1.ci[0].to_bits(), r2.ci[0].to_bits());
        assert_eq!(r1.ci[1].to_bits(), r2.ci[1].to_bits());
        assert_eq!(r1.risk[0].to_bits(), r2.risk[0].to_bits());
        assert_eq!(r1.risk[1].to_bits(), r2.risk[1].to_bits());
    }

    #[test]
    fn test_binomial_arm_swap_symmetry() {
        let fwd = binomial_ab_test(254, 1283, 289, 1321, DEFAULT_CCR).unwrap();
        let rev = binomial_ab_test(289, 1321, 254, 1283, DEFAULT_CCR).unwrap();
        assert!((fwd.uplift.mean + rev.uplift.mean).abs() < 1e-12);
        assert!((fwd.uplift.stddev - rev.uplift.stddev).abs() < 1e-15);
        assert!((fwd.chance_to_win + rev.chance_to_win - 1.0).abs() < 1e-12);
        assert!((fwd.risk[0] - rev.risk[1]).abs() < 1e-12);
        assert!((fwd.risk[1] - rev.risk[0]).abs() < 1e-12);
    }

    #[test]
    fn test_binomial_null_effect_large_samples() {
        let r = binomial_ab_test(10_000, 100_000, 10_000, 100_000, DEFAULT_CCR).unwrap();
        assert!((r.chance_to_win - 0.5).abs() < 1e-12);
        assert!(r.expected.abs() < 1e-12);
        // Equal posteriors: both risks equal and small.
        assert!((r.risk[0] - r.risk[1]).abs() < 1e-12);
        assert!(r.risk[0] < 1e-3);
    }

    #[test]
    fn test_binomial_interval_shrinks_with_sample_size() {
        let small = binomial_ab_test(20, 100, 25, 100, DEFAULT_CCR).unwrap();
        let large = binomial_ab_test(2_000, 10_000, 2_500, 10_000, DEFAULT_CCR).unwrap();
        assert!(large.ci[1] - large.ci[0] < small.ci[1] - small.ci[0]);
    }
}
