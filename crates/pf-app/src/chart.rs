//! The recompute pass: parameters + dataset → chart series.

use std::fmt;

use pf_curve::{arrange, fit};
use pf_dataset::DatasetSource;
use pf_hydro::{FlowSweep, FluidSpec, PipelineSpec, compute_loss_curve};
use serde::Serialize;

use crate::error::AppResult;
use crate::parameters::OperatingParameters;
use crate::session::SessionState;

/// Which dataset produced the chart, for the shell's status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DatasetStatus {
    Default,
    Uploaded { filename: String },
}

impl From<&DatasetSource> for DatasetStatus {
    fn from(source: &DatasetSource) -> Self {
        match source {
            DatasetSource::Bundled => DatasetStatus::Default,
            DatasetSource::Uploaded { filename } => DatasetStatus::Uploaded {
                filename: filename.clone(),
            },
        }
    }
}

impl fmt::Display for DatasetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetStatus::Default => write!(f, "default"),
            DatasetStatus::Uploaded { filename } => write!(f, "uploaded: {filename}"),
        }
    }
}

/// Combined chart series.
///
/// `discharge`/`head`/`efficiency` are the arranged pump curve on its
/// 300-point grid; `loss_flow`/`loss_head` are the 20-point system
/// resistance curve. The two x-axes differ on purpose — the shell overlays
/// them on shared axes and the crossing of head and loss marks the operating
/// point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub discharge: Vec<f64>,
    pub head: Vec<f64>,
    pub efficiency: Vec<f64>,
    pub loss_flow: Vec<f64>,
    pub loss_head: Vec<f64>,
    pub dataset_status: DatasetStatus,
}

/// One full recompute: fit the active dataset, arrange it for the pump bank,
/// sweep the friction model, and merge the series.
///
/// Pure apart from a debug trace; holds no state between calls, so every
/// input event simply calls it again.
pub fn render_chart(
    params: &OperatingParameters,
    session: &SessionState,
) -> AppResult<ChartData> {
    params.validate()?;

    let fitted = fit(session.dataset().samples())?;
    let arranged = arrange(fitted.points(), params.parallel_count, params.series_count)?;

    let fluid = FluidSpec {
        viscosity: params.viscosity,
        density: params.density,
    };
    let pipeline = PipelineSpec {
        length: params.pipeline_length,
        static_lift: params.static_lift,
    };
    let loss = compute_loss_curve(&FlowSweep::default(), &fluid, params.pipe_size, &pipeline)?;

    tracing::debug!(
        samples = session.dataset().samples().len(),
        parallel = params.parallel_count,
        series = params.series_count,
        pipe = %params.pipe_size,
        "recomputed operating point chart"
    );

    Ok(ChartData {
        discharge: arranged.discharge,
        head: arranged.head,
        efficiency: arranged.efficiency,
        loss_flow: loss.flow,
        loss_head: loss.total_head,
        dataset_status: session.status().into(),
    })
}
