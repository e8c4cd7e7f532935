//! Error types for hydraulic calculations.

use thiserror::Error;

pub type HydroResult<T> = Result<T, HydroError>;

/// Errors that can occur during pipeline loss calculations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HydroError {
    #[error("Unknown nominal pipe size: {nominal_in} in")]
    UnknownPipeSize { nominal_in: u32 },

    #[error("Invalid friction input: {what}")]
    InvalidFrictionInput { what: &'static str },
}
