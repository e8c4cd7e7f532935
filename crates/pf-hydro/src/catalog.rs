//! Nominal pipe size catalog.
//!
//! Standard schedule sizes with their effective inner diameters. The
//! "optimum" diameter is the nominal bore itself and feeds the relative
//! roughness term of the friction model.

use std::fmt;

use pf_core::units::{Length, inches};

use crate::error::{HydroError, HydroResult};

/// Standard nominal pipe sizes offered to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NominalSize {
    In4,
    In5,
    In6,
    In8,
    In10,
    In12,
    In14,
    In16,
    In18,
    In20,
    In24,
}

/// One catalog row: nominal bore and effective inner diameter, both in
/// inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeCatalogEntry {
    pub nominal: NominalSize,
    pub nominal_in: u32,
    pub inner_diameter_in: f64,
}

/// Catalog rows, ordered by nominal size (same order as [`NominalSize::ALL`]).
pub const PIPE_CATALOG: [PipeCatalogEntry; 11] = [
    PipeCatalogEntry {
        nominal: NominalSize::In4,
        nominal_in: 4,
        inner_diameter_in: 4.026,
    },
    PipeCatalogEntry {
        nominal: NominalSize::In5,
        nominal_in: 5,
        inner_diameter_in: 5.047,
    },
    PipeCatalogEntry {
        nominal: NominalSize::In6,
        nominal_in: 6,
        inner_diameter_in: 6.065,
    },
    PipeCatalogEntry {
        nominal: NominalSize::In8,
        nominal_in: 8,
        inner_diameter_in: 7.981,
    },
    PipeCatalogEntry {
        nominal: NominalSize::In10,
        nominal_in: 10,
        inner_diameter_in: 10.02,
    },
    PipeCatalogEntry {
        nominal: NominalSize::In12,
        nominal_in: 12,
        inner_diameter_in: 11.938,
    },
    PipeCatalogEntry {
        nominal: NominalSize::In14,
        nominal_in: 14,
        inner_diameter_in: 13.125,
    },
    PipeCatalogEntry {
        nominal: NominalSize::In16,
        nominal_in: 16,
        inner_diameter_in: 15.0,
    },
    PipeCatalogEntry {
        nominal: NominalSize::In18,
        nominal_in: 18,
        inner_diameter_in: 16.874,
    },
    PipeCatalogEntry {
        nominal: NominalSize::In20,
        nominal_in: 20,
        inner_diameter_in: 18.814,
    },
    PipeCatalogEntry {
        nominal: NominalSize::In24,
        nominal_in: 24,
        inner_diameter_in: 22.626,
    },
];

impl NominalSize {
    /// All catalog sizes in ascending order.
    pub const ALL: [NominalSize; 11] = [
        NominalSize::In4,
        NominalSize::In5,
        NominalSize::In6,
        NominalSize::In8,
        NominalSize::In10,
        NominalSize::In12,
        NominalSize::In14,
        NominalSize::In16,
        NominalSize::In18,
        NominalSize::In20,
        NominalSize::In24,
    ];

    /// Resolve a nominal bore in inches against the catalog.
    ///
    /// The UI only offers catalog sizes, but parameter files and the CLI can
    /// name arbitrary bores, so the guard stays.
    pub fn from_nominal_in(nominal_in: u32) -> HydroResult<Self> {
        PIPE_CATALOG
            .iter()
            .find(|entry| entry.nominal_in == nominal_in)
            .map(|entry| entry.nominal)
            .ok_or(HydroError::UnknownPipeSize { nominal_in })
    }

    pub fn entry(self) -> &'static PipeCatalogEntry {
        &PIPE_CATALOG[self as usize]
    }

    pub fn nominal_in(self) -> u32 {
        self.entry().nominal_in
    }

    /// Effective inner diameter.
    pub fn inner_diameter(self) -> Length {
        inches(self.entry().inner_diameter_in)
    }

    /// Nominal bore used in the relative roughness term.
    pub fn optimum_diameter(self) -> Length {
        inches(self.entry().nominal_in as f64)
    }
}

impl fmt::Display for NominalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in", self.nominal_in())
    }
}
