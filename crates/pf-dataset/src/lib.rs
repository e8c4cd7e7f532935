//! pf-dataset: pump curve datasets for pumpflow.
//!
//! Provides:
//! - the bundled default pump curve
//! - CSV and spreadsheet parsing with header detection and row hygiene
//! - `Dataset`, the owned active sample set with its provenance

pub mod bundled;
pub mod dataset;
pub mod error;
pub mod parse;

// Re-exports for ergonomics
pub use bundled::DEFAULT_PUMP_CURVE;
pub use dataset::{Dataset, DatasetSource};
pub use error::{DatasetError, DatasetResult};
pub use parse::{MIN_ROWS, REQUIRED_COLUMNS, TableFormat, parse_dataset};
