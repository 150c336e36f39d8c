//! Small numeric helpers not covered by statrs.

use statrs::function::gamma::ln_gamma;

/// Natural log of the complete Beta function `B(a, b)`.
#[inline]
pub fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// Trigamma function `ψ'(x)` for `x > 0`.
///
/// Recurrence `ψ'(x) = ψ'(x+1) + 1/x²` shifts the argument above 10,
/// then the asymptotic expansion
/// `ψ'(x) ≈ 1/x + 1/(2x²) + 1/(6x³) − 1/(30x⁵) + 1/(42x⁷) − 1/(30x⁹)`
/// applies. The first omitted term, `5/(66x¹¹)`, is below 8e-13 at the
/// shift threshold, so accuracy is better than 1e-12 over the shapes
/// produced by Beta-Binomial posterior updates.
pub fn trigamma(x: f64) -> f64 {
    if !x.is_finite() || x <= 0.0 {
        return f64::NAN;
    }
    let mut x = x;
    let mut acc = 0.0;
    while x < 10.0 {
        acc += 1.0 / (x * x);
        x += 1.0;
    }
    let inv = 1.0 / x;
    let inv2 = inv * inv;
    let tail = 1.0 / 6.0 + inv2 * (-1.0 / 30.0 + inv2 * (1.0 / 42.0 + inv2 * (-1.0 / 30.0)));
    acc + inv * (1.0 + inv * (0.5 + inv * tail))
}

/// Gauss-Legendre nodes and weights of order `n` on `[-1, 1]`.
///
/// Newton iteration on the Legendre recurrence (no randomness, so
/// quadrature built on these nodes is bit-reproducible).
pub fn gauss_legendre(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut nodes = vec![0.0; n];
    let mut weights = vec![0.0; n];
    let half = (n + 1) / 2;
    for i in 0..half {
        // Chebyshev initial guess for the i-th root.
        let mut z = (std::f64::consts::PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();
        let mut dp = 0.0;
        for _ in 0..100 {
            let mut p0 = 1.0;
            let mut p1 = 0.0;
            for j in 0..n {
                let p2 = p1;
                p1 = p0;
                p0 = ((2.0 * j as f64 + 1.0) * z * p1 - j as f64 * p2) / (j as f64 + 1.0);
            }
            dp = n as f64 * (z * p0 - p1) / (z * z - 1.0);
            let step = p0 / dp;
            z -= step;
            if step.abs() < 1e-15 {
                break;
            }
        }
        nodes[i] = -z;
        nodes[n - 1 - i] = z;
        let w = 2.0 / ((1.0 - z * z) * dp * dp);
        weights[i] = w;
        weights[n - 1 - i] = w;
    }
    (nodes, weights)
}

/// Composite Gauss-Legendre integral of `f` over `[lo, hi]`.
///
/// Fixed panel count and order keep the result deterministic and
/// reproducible across runs. Returns 0 for an empty interval.
pub fn integrate<F: Fn(f64) -> f64>(f: F, lo: f64, hi: f64, panels: usize, order: usize) -> f64 {
    let (nodes, weights) = gauss_legendre(order);
    integrate_with(f, lo, hi, panels, &nodes, &weights)
}

/// Composite Gauss-Legendre integral over a precomputed rule.
///
/// Callers on a hot path cache the nodes/weights for their fixed order
/// rather than re-running the Newton solve on every integral.
pub fn integrate_with<F: Fn(f64) -> f64>(
    f: F,
    lo: f64,
    hi: f64,
    panels: usize,
    nodes: &[f64],
    weights: &[f64],
) -> f64 {
    if hi <= lo || panels == 0 {
        return 0.0;
    }
    let h = (hi - lo) / panels as f64;
    let half_h = 0.5 * h;
    let mut total = 0.0;
    for k in 0..panels {
        let center = lo + (k as f64 + 0.5) * h;
        for (z, w) in nodes.iter().zip(weights.iter()) {
            total += w * f(center + half_h * z);
        }
    }
    total * half_h
}
