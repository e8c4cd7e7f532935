//! Error types for dataset parsing.

use thiserror::Error;

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Ways an uploaded dataset can be rejected.
///
/// All of these are recoverable at the shell boundary: the previous dataset
/// stays active and the message goes to the status line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Required column '{column}' is missing")]
    MissingColumn { column: &'static str },

    #[error("Only {rows} valid rows after parsing, need at least {min}")]
    TooFewRows { rows: usize, min: usize },

    #[error("Unreadable dataset: {message}")]
    Unreadable { message: String },

    #[error("Unsupported dataset format: {filename}")]
    UnsupportedFormat { filename: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DatasetError::MissingColumn {
            column: "efficiency",
        };
        assert!(err.to_string().contains("efficiency"));

        let err = DatasetError::TooFewRows { rows: 2, min: 4 };
        assert!(err.to_string().contains("2 valid rows"));
    }
}
