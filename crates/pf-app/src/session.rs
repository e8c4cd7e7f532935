//! Session-scoped dataset state.

use pf_dataset::{Dataset, DatasetSource};

use crate::error::AppResult;

/// The one piece of state that outlives a recompute: the active dataset.
///
/// Uploads replace it wholesale; a rejected upload leaves the previous
/// dataset in place (last known good). During a recompute pass the session
/// is only read.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    dataset: Dataset,
}

impl SessionState {
    /// Fresh session with the bundled default pump curve.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn status(&self) -> &DatasetSource {
        self.dataset.source()
    }

    /// Swap in an uploaded dataset.
    ///
    /// On any parse failure the active dataset is untouched and the error is
    /// handed back for the status line.
    pub fn upload(&mut self, bytes: &[u8], filename: &str) -> AppResult<()> {
        match Dataset::from_upload(bytes, filename) {
            Ok(dataset) => {
                self.dataset = dataset;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(filename, error = %err, "upload rejected, keeping active dataset");
                Err(err.into())
            }
        }
    }
}
