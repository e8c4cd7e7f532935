//! Parallel/series pump arrangement transform.
//!
//! N identical pumps in parallel split the flow at equal head, so the
//! combined curve stretches the discharge axis by N. M identical pumps in
//! series stack head at equal flow, stretching the head axis by M. The
//! efficiency curve is left untouched: identical pumps each run at the
//! per-pump operating point, so the per-pump efficiency is assumed to carry
//! over to the bank.

use crate::error::{CurveError, CurveResult};
use crate::fit::CurvePoints;

/// Rescale a fitted pump curve for `parallel` pumps in parallel and
/// `series` pumps in series.
///
/// Pure: the input curve is left unchanged. `arrange(points, 1, 1)` is the
/// identity transform.
pub fn arrange(points: &CurvePoints, parallel: u32, series: u32) -> CurveResult<CurvePoints> {
    if parallel < 1 {
        return Err(CurveError::InvalidArg {
            what: "parallel pump count must be at least 1",
        });
    }
    if series < 1 {
        return Err(CurveError::InvalidArg {
            what: "series pump count must be at least 1",
        });
    }

    let parallel = parallel as f64;
    let series = series as f64;

    Ok(CurvePoints {
        discharge: points.discharge.iter().map(|&q| q * parallel).collect(),
        head: points.head.iter().map(|&h| h * series).collect(),
        efficiency: points.efficiency.clone(),
    })
}
