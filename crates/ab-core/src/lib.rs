//! # ab-core
//!
//! Shared foundation for the abstat A/B decision engine:
//! - the `Error`/`Result` types used by every crate in the workspace
//! - the output bundle (`TestResult`) and log-space moment types
//! - the `ConjugateModel` trait that both metric families implement
//!
//! Higher-level crates (`ab-prob`, `ab-inference`, `ab-cli`) depend on
//! this crate and never on each other's internals.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::ConjugateModel;
pub use types::{LogMoments, TestResult, Uplift};
