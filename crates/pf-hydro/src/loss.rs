//! System-resistance (loss) curve generation.

use crate::catalog::NominalSize;
use crate::error::HydroResult;
use crate::friction::{FluidSpec, PipelineSpec, total_dynamic_head};
use crate::sweep::FlowSweep;

/// Total dynamic head across a flow sweep.
///
/// `flow` preserves the sweep ordering (strictly increasing); `total_head`
/// is aligned with it and is not necessarily monotonic.
#[derive(Debug, Clone, PartialEq)]
pub struct LossCurve {
    /// Flow values [m³/h]
    pub flow: Vec<f64>,
    /// Total dynamic head [m]
    pub total_head: Vec<f64>,
}

impl LossCurve {
    pub fn len(&self) -> usize {
        self.flow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flow.is_empty()
    }
}

/// Evaluate the friction model at every point of the sweep.
///
/// Recomputed wholesale on every parameter change; there is no incremental
/// state to invalidate.
pub fn compute_loss_curve(
    sweep: &FlowSweep,
    fluid: &FluidSpec,
    pipe: NominalSize,
    pipeline: &PipelineSpec,
) -> HydroResult<LossCurve> {
    let flow = sweep.generate_points();
    let mut total_head = Vec::with_capacity(flow.len());
    for &q in &flow {
        total_head.push(total_dynamic_head(q, fluid, pipe, pipeline)?);
    }
    Ok(LossCurve { flow, total_head })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::friction::FITTING_MARGIN_M;
    use crate::sweep::SWEEP_POINTS;
    use pf_core::units::{cp, kgm3, km, m};

    #[test]
    fn default_sweep_loss_curve() {
        let fluid = FluidSpec {
            viscosity: cp(10.0),
            density: kgm3(820.0),
        };
        let pipeline = PipelineSpec {
            length: km(20.0),
            static_lift: m(50.0),
        };

        let curve =
            compute_loss_curve(&FlowSweep::default(), &fluid, NominalSize::In8, &pipeline)
                .unwrap();

        assert_eq!(curve.len(), SWEEP_POINTS);
        assert_eq!(curve.total_head.len(), SWEEP_POINTS);
        for pair in curve.flow.windows(2) {
            assert!(pair[1] > pair[0], "sweep ordering must be preserved");
        }
        // 1.15·hf is non-negative, so every point carries at least the
        // static lift plus the fitting margin.
        for &ht in &curve.total_head {
            assert!(ht >= 50.0 + FITTING_MARGIN_M);
        }
        assert!(curve.total_head[SWEEP_POINTS - 1] > curve.total_head[0]);
    }

    #[test]
    fn propagates_friction_errors() {
        let fluid = FluidSpec {
            viscosity: cp(10.0),
            density: kgm3(-1.0),
        };
        let pipeline = PipelineSpec {
            length: km(20.0),
            static_lift: m(50.0),
        };
        assert!(
            compute_loss_curve(&FlowSweep::default(), &fluid, NominalSize::In8, &pipeline)
                .is_err()
        );
    }
}
