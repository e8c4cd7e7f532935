//! Flow sweep for the system-resistance curve.

use pf_core::numeric::linspace;

/// Lower bound of the default sweep [m³/h]; just above zero so the Reynolds
/// number stays positive at the first point.
pub const SWEEP_MIN_FLOW_M3_PER_H: f64 = 0.0001;

/// Upper bound of the default sweep [m³/h].
pub const SWEEP_MAX_FLOW_M3_PER_H: f64 = 450.0;

/// Number of points in the default sweep.
pub const SWEEP_POINTS: usize = 20;

/// An inclusive, uniformly spaced flow range.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSweep {
    pub start_m3_per_h: f64,
    pub end_m3_per_h: f64,
    pub num_points: usize,
}

impl Default for FlowSweep {
    fn default() -> Self {
        Self {
            start_m3_per_h: SWEEP_MIN_FLOW_M3_PER_H,
            end_m3_per_h: SWEEP_MAX_FLOW_M3_PER_H,
            num_points: SWEEP_POINTS,
        }
    }
}

impl FlowSweep {
    /// Generate all flow values in the sweep, endpoints exact.
    pub fn generate_points(&self) -> Vec<f64> {
        linspace(self.start_m3_per_h, self.end_m3_per_h, self.num_points)
    }
}
