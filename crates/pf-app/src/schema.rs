//! Parameters file schema.
//!
//! Plain-f64, unit-suffixed fields on disk; converted into the uom-typed
//! [`OperatingParameters`] with validation on load. Every field is optional
//! and falls back to the documented default, so a blank file means "all
//! defaults".

use std::fs;
use std::path::Path;

use pf_core::units::{cp, kgm3, km, m};
use pf_hydro::NominalSize;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::parameters::OperatingParameters;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParametersDef {
    #[serde(default = "default_viscosity_cp")]
    pub viscosity_cp: f64,
    #[serde(default = "default_density_kg_per_m3")]
    pub density_kg_per_m3: f64,
    #[serde(default = "default_pipeline_length_km")]
    pub pipeline_length_km: f64,
    #[serde(default = "default_static_lift_m")]
    pub static_lift_m: f64,
    #[serde(default = "default_pipe_nominal_in")]
    pub pipe_nominal_in: u32,
    #[serde(default = "default_pump_count")]
    pub parallel_pumps: u32,
    #[serde(default = "default_pump_count")]
    pub series_pumps: u32,
}

fn default_viscosity_cp() -> f64 {
    10.0
}

fn default_density_kg_per_m3() -> f64 {
    820.0
}

fn default_pipeline_length_km() -> f64 {
    20.0
}

fn default_static_lift_m() -> f64 {
    50.0
}

fn default_pipe_nominal_in() -> u32 {
    8
}

fn default_pump_count() -> u32 {
    1
}

impl Default for ParametersDef {
    fn default() -> Self {
        Self {
            viscosity_cp: default_viscosity_cp(),
            density_kg_per_m3: default_density_kg_per_m3(),
            pipeline_length_km: default_pipeline_length_km(),
            static_lift_m: default_static_lift_m(),
            pipe_nominal_in: default_pipe_nominal_in(),
            parallel_pumps: default_pump_count(),
            series_pumps: default_pump_count(),
        }
    }
}

impl ParametersDef {
    /// Convert into validated runtime parameters.
    pub fn into_parameters(self) -> AppResult<OperatingParameters> {
        let pipe_size = NominalSize::from_nominal_in(self.pipe_nominal_in)?;
        let parameters = OperatingParameters {
            viscosity: cp(self.viscosity_cp),
            density: kgm3(self.density_kg_per_m3),
            pipeline_length: km(self.pipeline_length_km),
            static_lift: m(self.static_lift_m),
            pipe_size,
            parallel_count: self.parallel_pumps,
            series_count: self.series_pumps,
        };
        parameters.validate()?;
        Ok(parameters)
    }
}

/// Load operating parameters from a YAML file.
pub fn load_parameters(path: &Path) -> AppResult<OperatingParameters> {
    let text = fs::read_to_string(path).map_err(|source| AppError::ParametersFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let def: ParametersDef = if text.trim().is_empty() {
        ParametersDef::default()
    } else {
        serde_yaml::from_str(&text).map_err(|e| AppError::ParametersParse(e.to_string()))?
    };
    def.into_parameters()
}
