//! # ab-inference
//!
//! Decision-metric assembly for abstat:
//! - the uplift engine (chance to win, expected relative uplift,
//!   credible interval, all back-transformed from log space)
//! - the two test drivers, `binomial_ab_test` and `gaussian_ab_test`,
//!   which orchestrate a conjugate family and the uplift engine into
//!   one result bundle per metric family.
//!
//! Every function here is pure and total over well-formed inputs: no
//! I/O, no shared state, no randomness. Invocations share nothing, so
//! callers may run arbitrarily many in parallel.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Test drivers: one `TestResult` per metric family.
pub mod ab_test;
/// Log-space uplift statistics shared by both metric families.
pub mod uplift;

pub use ab_test::{ab_test, binomial_ab_test, gaussian_ab_test, DEFAULT_CCR};
pub use uplift::{uplift, UpliftSummary};
