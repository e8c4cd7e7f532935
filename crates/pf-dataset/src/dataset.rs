//! The active pump curve dataset.

use std::fmt;

use pf_curve::SamplePoint;

use crate::bundled::DEFAULT_PUMP_CURVE;
use crate::error::DatasetResult;
use crate::parse::parse_dataset;

/// Where the active samples came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Bundled,
    Uploaded { filename: String },
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Bundled => write!(f, "default pump curve"),
            DatasetSource::Uploaded { filename } => write!(f, "uploaded: {filename}"),
        }
    }
}

/// An owned, fit-ready sample set with its provenance.
///
/// Construction is the only way in: either the bundled defaults or a fully
/// parsed upload, so a `Dataset` in hand always satisfies the ordering and
/// minimum-count requirements of the fitter.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    samples: Vec<SamplePoint>,
    source: DatasetSource,
}

impl Dataset {
    /// The bundled default pump curve.
    pub fn bundled() -> Self {
        Self {
            samples: DEFAULT_PUMP_CURVE.to_vec(),
            source: DatasetSource::Bundled,
        }
    }

    /// Parse an upload into a replacement dataset.
    pub fn from_upload(bytes: &[u8], filename: &str) -> DatasetResult<Self> {
        Ok(Self {
            samples: parse_dataset(bytes, filename)?,
            source: DatasetSource::Uploaded {
                filename: filename.to_string(),
            },
        })
    }

    pub fn samples(&self) -> &[SamplePoint] {
        &self.samples
    }

    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    pub fn is_uploaded(&self) -> bool {
        matches!(self.source, DatasetSource::Uploaded { .. })
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_reports_source() {
        let dataset = Dataset::bundled();
        assert_eq!(dataset.source(), &DatasetSource::Bundled);
        assert!(!dataset.is_uploaded());
        assert_eq!(dataset.samples().len(), DEFAULT_PUMP_CURVE.len());
        assert_eq!(dataset.source().to_string(), "default pump curve");
    }

    #[test]
    fn upload_round_trip() {
        let csv = "discharge,head,efficiency\n0,50,0.5\n100,48,0.7\n200,40,0.8\n300,25,0.6\n";
        let dataset = Dataset::from_upload(csv.as_bytes(), "field_test.csv").unwrap();
        assert!(dataset.is_uploaded());
        assert_eq!(dataset.samples().len(), 4);
        assert_eq!(dataset.source().to_string(), "uploaded: field_test.csv");
    }

    #[test]
    fn failed_upload_produces_no_dataset() {
        let err = Dataset::from_upload(b"discharge,head\n1,2\n", "curve.csv").unwrap_err();
        assert!(err.to_string().contains("efficiency"));
    }
}
