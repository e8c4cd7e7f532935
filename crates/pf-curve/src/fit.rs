//! Pump curve fitting.
//!
//! Fits independent natural cubic splines through the (discharge, head) and
//! (discharge, efficiency) samples and samples both on a shared evaluation
//! grid spanning the discharge range of the input set. The grid is derived
//! from the samples, so swapping the active dataset moves the grid with it.

use pf_core::numeric::linspace;

use crate::error::{CurveError, CurveResult};
use crate::sample::{SamplePoint, check_strictly_increasing};
use crate::spline::CubicSpline;

/// Minimum number of samples for a cubic fit.
pub const MIN_SAMPLES: usize = 4;

/// Number of evaluation points used for display.
pub const FIT_RESOLUTION: usize = 300;

/// A fitted pump curve sampled on its evaluation grid.
///
/// The three arrays are aligned: `head[i]` and `efficiency[i]` belong to
/// `discharge[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePoints {
    /// Evaluation grid [m³/h]
    pub discharge: Vec<f64>,
    /// Interpolated head [m]
    pub head: Vec<f64>,
    /// Interpolated efficiency [0, 1]
    pub efficiency: Vec<f64>,
}

impl CurvePoints {
    pub fn len(&self) -> usize {
        self.discharge.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discharge.is_empty()
    }
}

/// A fitted pump characteristic: continuous head and efficiency interpolants
/// plus their sampled display form.
#[derive(Debug, Clone)]
pub struct FittedCurve {
    head: CubicSpline,
    efficiency: CubicSpline,
    points: CurvePoints,
}

impl FittedCurve {
    /// Interpolated head at the given discharge [m³/h].
    pub fn head_at(&self, discharge: f64) -> f64 {
        self.head.evaluate(discharge)
    }

    /// Interpolated efficiency at the given discharge [m³/h].
    pub fn efficiency_at(&self, discharge: f64) -> f64 {
        self.efficiency.evaluate(discharge)
    }

    /// Discharge range the interpolants are valid on.
    pub fn domain(&self) -> (f64, f64) {
        self.head.domain()
    }

    /// Sampled form at [`FIT_RESOLUTION`] points.
    pub fn points(&self) -> &CurvePoints {
        &self.points
    }
}

/// Fit a smooth pump curve through the given performance samples.
///
/// # Errors
/// Fails with [`CurveError::InsufficientData`] for fewer than
/// [`MIN_SAMPLES`] points and [`CurveError::UnorderedSamples`] when the
/// discharges are not strictly increasing.
pub fn fit(samples: &[SamplePoint]) -> CurveResult<FittedCurve> {
    if samples.len() < MIN_SAMPLES {
        return Err(CurveError::InsufficientData {
            count: samples.len(),
            min: MIN_SAMPLES,
        });
    }
    check_strictly_increasing(samples)?;

    let discharges: Vec<f64> = samples.iter().map(|s| s.discharge).collect();
    let heads: Vec<f64> = samples.iter().map(|s| s.head).collect();
    let efficiencies: Vec<f64> = samples.iter().map(|s| s.efficiency).collect();

    let head = CubicSpline::new(discharges.clone(), heads)?;
    let efficiency = CubicSpline::new(discharges.clone(), efficiencies)?;

    let grid = linspace(
        discharges[0],
        discharges[discharges.len() - 1],
        FIT_RESOLUTION,
    );
    let points = CurvePoints {
        head: grid.iter().map(|&q| head.evaluate(q)).collect(),
        efficiency: grid.iter().map(|&q| efficiency.evaluate(q)).collect(),
        discharge: grid,
    };

    Ok(FittedCurve {
        head,
        efficiency,
        points,
    })
}
