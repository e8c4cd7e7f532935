//! pf-hydro: pipeline hydraulics for pumpflow.
//!
//! Provides:
//! - nominal pipe size catalog (inner/optimum diameters)
//! - closed-form turbulent friction factor (Colebrook rational approximation)
//! - frictional and total dynamic head for a pipeline
//! - flow sweep + system-resistance (loss) curve generation

pub mod catalog;
pub mod error;
pub mod friction;
pub mod loss;
pub mod sweep;

// Re-exports for ergonomics
pub use catalog::{NominalSize, PIPE_CATALOG, PipeCatalogEntry};
pub use error::{HydroError, HydroResult};
pub use friction::{
    FITTING_MARGIN_M, FRICTION_HEAD_COEFF, FluidSpec, MINOR_LOSS_FACTOR, PipelineSpec,
    REYNOLDS_FLOW_COEFF, ROUGHNESS_FACTOR_IN, friction_factor, reynolds_number,
    total_dynamic_head,
};
pub use loss::{LossCurve, compute_loss_curve};
pub use sweep::FlowSweep;
