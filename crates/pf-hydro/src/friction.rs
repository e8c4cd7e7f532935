//! Closed-form pipeline friction model.
//!
//! ## Model
//!
//! For a flow `q` [m³/h] through a catalog pipe, the total dynamic head is
//! built in four steps:
//!
//! ```text
//! r  = 0.0018 / d_optimum
//! re = 13.924 · q · ρ / (μ · d_inner)
//! x  = ln(1 / ((7/re)^0.9 + 0.27·r))
//! f  = 8 · ((8/re)^12 + 1/((2.457·x)^16 + (37.53/re)^16)^1.5)^(1/12)
//! hf = 603.042 · f · q² · L / d_inner^5
//! ht = 1.15·hf + z + 30
//! ```
//!
//! The friction factor is a rational approximation to the implicit
//! Colebrook-White equation valid across laminar, transitional and turbulent
//! regimes, so no iterative root-finding is needed. The coefficients 13.924
//! and 603.042 are fixed empirical values that bundle the unit conversions
//! for q in m³/h, μ in cP, ρ in kg/m³, diameters in inches and L in km; they
//! are calibration constants and are not re-derived here. The 1.15 factor
//! covers minor/fitting losses and the 30 m term is a fixed fitting margin.
//!
//! Every argument fed to `ln` or a fractional power is checked positive
//! first; the model fails with [`HydroError::InvalidFrictionInput`] instead
//! of producing NaN.

use pf_core::numeric::ensure_finite;
use pf_core::units::{Density, DynVisc, Length};
use uom::si::dynamic_viscosity::centipoise;
use uom::si::length::{inch, kilometer, meter};
use uom::si::mass_density::kilogram_per_cubic_meter;

use crate::catalog::NominalSize;
use crate::error::{HydroError, HydroResult};

/// Empirical Reynolds-number coefficient for q [m³/h], ρ [kg/m³], μ [cP],
/// d [in].
pub const REYNOLDS_FLOW_COEFF: f64 = 13.924;

/// Empirical head-loss coefficient for q [m³/h], L [km], d [in], hf [m].
pub const FRICTION_HEAD_COEFF: f64 = 603.042;

/// Fixed roughness numerator [in]; size-independent in this model.
pub const ROUGHNESS_FACTOR_IN: f64 = 0.0018;

/// Fixed 15% margin for minor/fitting losses.
pub const MINOR_LOSS_FACTOR: f64 = 1.15;

/// Fixed additional fitting margin [m].
pub const FITTING_MARGIN_M: f64 = 30.0;

/// Fluid properties entering the friction model.
#[derive(Debug, Clone, Copy)]
pub struct FluidSpec {
    /// Dynamic viscosity
    pub viscosity: DynVisc,
    /// Density
    pub density: Density,
}

/// Pipeline geometry and elevation.
#[derive(Debug, Clone, Copy)]
pub struct PipelineSpec {
    /// Pipeline length
    pub length: Length,
    /// Static lift between suction and delivery levels
    pub static_lift: Length,
}

fn check_finite(value: f64, what: &'static str) -> HydroResult<f64> {
    ensure_finite(value, what).map_err(|_| HydroError::InvalidFrictionInput { what })
}

fn check_positive(value: f64, what: &'static str) -> HydroResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(HydroError::InvalidFrictionInput { what })
    }
}

/// Reynolds number for the empirical unit set (q [m³/h], ρ [kg/m³], μ [cP],
/// d [in]).
pub fn reynolds_number(
    flow_m3_per_h: f64,
    density_kg_per_m3: f64,
    viscosity_cp: f64,
    inner_diameter_in: f64,
) -> HydroResult<f64> {
    check_positive(flow_m3_per_h, "flow must be positive")?;
    check_positive(density_kg_per_m3, "density must be positive")?;
    check_positive(viscosity_cp, "viscosity must be positive")?;
    check_positive(inner_diameter_in, "inner diameter must be positive")?;

    Ok(REYNOLDS_FLOW_COEFF * flow_m3_per_h * density_kg_per_m3
        / (viscosity_cp * inner_diameter_in))
}

/// Darcy friction factor from the closed-form Colebrook approximation.
pub fn friction_factor(reynolds: f64, relative_roughness: f64) -> HydroResult<f64> {
    check_positive(reynolds, "Reynolds number must be positive")?;
    if !relative_roughness.is_finite() || relative_roughness < 0.0 {
        return Err(HydroError::InvalidFrictionInput {
            what: "relative roughness must be non-negative",
        });
    }

    let ln_arg = (7.0 / reynolds).powf(0.9) + 0.27 * relative_roughness;
    if !ln_arg.is_finite() || ln_arg <= 0.0 {
        return Err(HydroError::InvalidFrictionInput {
            what: "log argument must be positive",
        });
    }

    let x = (1.0 / ln_arg).ln();
    let a = (2.457 * x).powi(16);
    let b = (37.53 / reynolds).powi(16);
    let f = 8.0 * ((8.0 / reynolds).powi(12) + 1.0 / (a + b).powf(1.5)).powf(1.0 / 12.0);

    check_finite(f, "friction factor")
}

/// Total dynamic head [m] at one flow value: friction loss plus static lift
/// plus the fixed fitting margins.
pub fn total_dynamic_head(
    flow_m3_per_h: f64,
    fluid: &FluidSpec,
    pipe: NominalSize,
    pipeline: &PipelineSpec,
) -> HydroResult<f64> {
    let density_kg_per_m3 = fluid.density.get::<kilogram_per_cubic_meter>();
    let viscosity_cp = fluid.viscosity.get::<centipoise>();
    let inner_diameter_in = pipe.inner_diameter().get::<inch>();
    let optimum_diameter_in = pipe.optimum_diameter().get::<inch>();
    let length_km = pipeline.length.get::<kilometer>();
    let static_lift_m = check_finite(pipeline.static_lift.get::<meter>(), "static lift")?;

    if !length_km.is_finite() || length_km < 0.0 {
        return Err(HydroError::InvalidFrictionInput {
            what: "pipeline length must be non-negative",
        });
    }

    let relative_roughness = ROUGHNESS_FACTOR_IN / optimum_diameter_in;
    let reynolds = reynolds_number(
        flow_m3_per_h,
        density_kg_per_m3,
        viscosity_cp,
        inner_diameter_in,
    )?;
    let f = friction_factor(reynolds, relative_roughness)?;

    let friction_head_m =
        FRICTION_HEAD_COEFF * f * flow_m3_per_h * flow_m3_per_h * length_km
            / inner_diameter_in.powi(5);

    check_finite(
        MINOR_LOSS_FACTOR * friction_head_m + static_lift_m + FITTING_MARGIN_M,
        "total dynamic head",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::{cp, kgm3, km, m};

    fn reference_fluid() -> FluidSpec {
        FluidSpec {
            viscosity: cp(10.0),
            density: kgm3(820.0),
        }
    }

    fn reference_pipeline() -> PipelineSpec {
        PipelineSpec {
            length: km(20.0),
            static_lift: m(50.0),
        }
    }

    #[test]
    fn reynolds_reference_value() {
        // 13.924 * 100 * 820 / (10 * 7.981)
        let re = reynolds_number(100.0, 820.0, 10.0, 7.981).unwrap();
        assert!((re - 14306.08).abs() < 0.1, "re = {re}");
    }

    #[test]
    fn reynolds_rejects_non_positive_inputs() {
        assert!(reynolds_number(0.0, 820.0, 10.0, 7.981).is_err());
        assert!(reynolds_number(100.0, -1.0, 10.0, 7.981).is_err());
        assert!(reynolds_number(100.0, 820.0, 0.0, 7.981).is_err());
        assert!(reynolds_number(100.0, 820.0, 10.0, f64::NAN).is_err());
    }

    #[test]
    fn friction_factor_matches_laminar_line_at_low_reynolds() {
        // In the deep laminar regime the closed form collapses to f = 64/re.
        let f = friction_factor(100.0, 0.0018 / 8.0).unwrap();
        let laminar = 64.0 / 100.0;
        assert!(
            ((f - laminar) / laminar).abs() < 0.05,
            "f = {f}, laminar = {laminar}"
        );
    }

    #[test]
    fn friction_factor_turbulent_magnitude() {
        // Fully turbulent friction factors sit in the few-percent range.
        let f = friction_factor(1.0e5, 0.0018 / 8.0).unwrap();
        assert!(f > 0.01 && f < 0.08, "f = {f}");
    }

    #[test]
    fn near_zero_flow_leaves_only_static_terms() {
        // 8 in pipe, 10 cP, 820 kg/m³, 20 km, 50 m lift at q = 0.0001:
        // friction is negligible and ht ≈ 50 + 30.
        let ht = total_dynamic_head(
            0.0001,
            &reference_fluid(),
            NominalSize::In8,
            &reference_pipeline(),
        )
        .unwrap();
        assert!((ht - 80.0).abs() < 1e-3, "ht = {ht}");
    }

    #[test]
    fn head_grows_with_flow() {
        let fluid = reference_fluid();
        let pipeline = reference_pipeline();
        let low = total_dynamic_head(50.0, &fluid, NominalSize::In8, &pipeline).unwrap();
        let high = total_dynamic_head(450.0, &fluid, NominalSize::In8, &pipeline).unwrap();
        assert!(high > low);
        assert!(low >= 80.0);
    }

    #[test]
    fn negative_static_lift_is_allowed() {
        let pipeline = PipelineSpec {
            length: km(20.0),
            static_lift: m(-10.0),
        };
        let ht = total_dynamic_head(0.0001, &reference_fluid(), NominalSize::In8, &pipeline)
            .unwrap();
        assert!((ht - 20.0).abs() < 1e-3, "ht = {ht}");
    }

    #[test]
    fn zero_viscosity_rejected() {
        let fluid = FluidSpec {
            viscosity: cp(0.0),
            density: kgm3(820.0),
        };
        assert_eq!(
            total_dynamic_head(100.0, &fluid, NominalSize::In8, &reference_pipeline())
                .unwrap_err(),
            HydroError::InvalidFrictionInput {
                what: "viscosity must be positive"
            }
        );
    }
}
