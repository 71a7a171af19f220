//! Core error type.
//!
//! `qs-sim` wraps `CoreError` as one variant of its own `SimError`, so a
//! configuration failure surfaces unchanged through `BankSim::from_config`.

use thiserror::Error;

/// Errors raised while building times, configurations, or duration sources.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// Fails fast at setup; never raised mid-run.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid simulation time {0}: must be finite and non-negative")]
    InvalidTime(f64),

    #[error("duration source produced no positive value in {draws} draws (last: {last})")]
    DegenerateDuration { draws: u32, last: f64 },
}

/// Shorthand result type for `qs-core`.
pub type CoreResult<T> = Result<T, CoreError>;
