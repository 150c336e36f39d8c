//! Probability building blocks for abstat.
//!
//! This crate hosts the probability math used by the decision pipeline:
//! - standard-normal primitives (CDF, survival, quantile)
//! - the Beta-Binomial and Normal conjugate families
//! - small numeric helpers not covered by statrs (trigamma,
//!   deterministic Gauss-Legendre quadrature)

#![warn(clippy::all)]

pub mod beta;
pub mod gaussian;
pub mod math;
pub mod normal;

pub use beta::{BetaBinomial, BetaPosterior, BetaPrior, BinomialSummary};
pub use gaussian::{Gaussian, GaussianPosterior, GaussianPrior, GaussianSummary};
