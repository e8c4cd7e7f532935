//! Error types for the pf-app service layer.

use std::path::PathBuf;

use pf_curve::CurveError;
use pf_dataset::DatasetError;
use pf_hydro::HydroError;

/// Application error type that wraps errors from the backend crates and
/// provides a unified interface for both CLI and GUI.
///
/// Every variant is recoverable at the shell boundary: the shell keeps its
/// last-known-good state and surfaces the message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Insufficient pump curve data: {message}")]
    InsufficientData { message: String },

    #[error("Malformed dataset: {message}")]
    MalformedDataset { message: String },

    #[error("Unknown nominal pipe size: {nominal_in} in")]
    UnknownPipeSize { nominal_in: u32 },

    #[error("Invalid friction input: {message}")]
    InvalidFrictionInput { message: String },

    #[error("Invalid parameters: {message}")]
    InvalidParameters { message: String },

    #[error("Failed to read parameters file: {path}")]
    ParametersFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parameters file parse error: {0}")]
    ParametersParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pf-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<CurveError> for AppError {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::InsufficientData { count, min } => AppError::InsufficientData {
                message: format!("{count} samples, need at least {min}"),
            },
            CurveError::UnorderedSamples { index } => AppError::InsufficientData {
                message: format!("discharges not strictly increasing at index {index}"),
            },
            CurveError::InvalidArg { what } => AppError::InvalidParameters {
                message: what.to_string(),
            },
        }
    }
}

impl From<HydroError> for AppError {
    fn from(err: HydroError) -> Self {
        match err {
            HydroError::UnknownPipeSize { nominal_in } => AppError::UnknownPipeSize { nominal_in },
            HydroError::InvalidFrictionInput { what } => AppError::InvalidFrictionInput {
                message: what.to_string(),
            },
        }
    }
}

impl From<DatasetError> for AppError {
    fn from(err: DatasetError) -> Self {
        AppError::MalformedDataset {
            message: err.to_string(),
        }
    }
}
