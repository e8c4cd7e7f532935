//! pf-curve: pump characteristic curve fitting for pumpflow.
//!
//! Provides:
//! - `SamplePoint` performance samples (discharge, head, efficiency)
//! - natural cubic spline interpolation (`CubicSpline`)
//! - `fit` producing a smooth 300-point curve through the samples
//! - `arrange` rescaling a fitted curve for parallel/series pump banks

pub mod arrange;
pub mod error;
pub mod fit;
pub mod sample;
pub mod spline;

// Re-exports for ergonomics
pub use arrange::arrange;
pub use error::{CurveError, CurveResult};
pub use fit::{CurvePoints, FIT_RESOLUTION, FittedCurve, MIN_SAMPLES, fit};
pub use sample::SamplePoint;
pub use spline::CubicSpline;
