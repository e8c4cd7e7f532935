//! Error types for curve fitting.

use thiserror::Error;

pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur while fitting or transforming a pump curve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("Insufficient pump curve data: {count} samples, need at least {min}")]
    InsufficientData { count: usize, min: usize },

    #[error("Sample discharges must be strictly increasing (violation at index {index})")]
    UnorderedSamples { index: usize },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
