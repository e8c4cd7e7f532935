//! Operating parameters supplied by the UI shell.

use std::ops::RangeInclusive;

use pf_core::units::{Density, DynVisc, Length, cp, kgm3, km, m};
use pf_hydro::NominalSize;
use uom::si::dynamic_viscosity::centipoise;
use uom::si::length::{kilometer, meter};
use uom::si::mass_density::kilogram_per_cubic_meter;

use crate::error::{AppError, AppResult};

/// Widget range for pumps in parallel.
pub const PARALLEL_RANGE: RangeInclusive<u32> = 1..=5;

/// Widget range for pumps in series.
pub const SERIES_RANGE: RangeInclusive<u32> = 1..=10;

/// Everything a recompute needs besides the dataset.
///
/// Supplied fresh on every recompute; nothing here is mutated by the core.
#[derive(Debug, Clone, Copy)]
pub struct OperatingParameters {
    pub viscosity: DynVisc,
    pub density: Density,
    pub pipeline_length: Length,
    /// Elevation difference between suction and delivery; may be negative.
    pub static_lift: Length,
    pub pipe_size: NominalSize,
    pub parallel_count: u32,
    pub series_count: u32,
}

impl Default for OperatingParameters {
    fn default() -> Self {
        Self {
            viscosity: cp(10.0),
            density: kgm3(820.0),
            pipeline_length: km(20.0),
            static_lift: m(50.0),
            pipe_size: NominalSize::In8,
            parallel_count: 1,
            series_count: 1,
        }
    }
}

impl OperatingParameters {
    /// Range checks shared by every recompute entry point.
    pub fn validate(&self) -> AppResult<()> {
        let viscosity_cp = self.viscosity.get::<centipoise>();
        if !viscosity_cp.is_finite() || viscosity_cp <= 0.0 {
            return Err(AppError::InvalidParameters {
                message: "viscosity must be positive".to_string(),
            });
        }

        let density_kg_per_m3 = self.density.get::<kilogram_per_cubic_meter>();
        if !density_kg_per_m3.is_finite() || density_kg_per_m3 <= 0.0 {
            return Err(AppError::InvalidParameters {
                message: "density must be positive".to_string(),
            });
        }

        let length_km = self.pipeline_length.get::<kilometer>();
        if !length_km.is_finite() || length_km < 0.0 {
            return Err(AppError::InvalidParameters {
                message: "pipeline length must be non-negative".to_string(),
            });
        }

        if !self.static_lift.get::<meter>().is_finite() {
            return Err(AppError::InvalidParameters {
                message: "static lift must be finite".to_string(),
            });
        }

        if self.parallel_count < 1 || self.series_count < 1 {
            return Err(AppError::InvalidParameters {
                message: "pump counts must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = OperatingParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.pipe_size, NominalSize::In8);
        assert_eq!(params.parallel_count, 1);
        assert_eq!(params.series_count, 1);
    }

    #[test]
    fn out_of_range_values_rejected() {
        let mut params = OperatingParameters::default();
        params.viscosity = cp(0.0);
        assert!(params.validate().is_err());

        let mut params = OperatingParameters::default();
        params.density = kgm3(-1.0);
        assert!(params.validate().is_err());

        let mut params = OperatingParameters::default();
        params.pipeline_length = km(-0.5);
        assert!(params.validate().is_err());

        let mut params = OperatingParameters::default();
        params.parallel_count = 0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn negative_static_lift_is_valid() {
        let mut params = OperatingParameters::default();
        params.static_lift = m(-25.0);
        assert!(params.validate().is_ok());
    }
}
