//! Error types for the abstat engine.

use thiserror::Error;

/// abstat error type.
///
/// The three string variants mirror the engine's error taxonomy:
/// `Input` surfaces before any statistical computation, `Validation`
/// rejects semantically invalid summary statistics, and `Domain` flags
/// a violated mathematical precondition (which normally indicates a
/// bug in upstream validation rather than a user mistake).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed payload: missing keys, wrong arity
    #[error("Input error: {0}")]
    Input(String),

    /// Semantically invalid summary statistics
    #[error("Validation error: {0}")]
    Validation(String),

    /// Violated mathematical precondition
    #[error("Domain error: {0}")]
    Domain(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
