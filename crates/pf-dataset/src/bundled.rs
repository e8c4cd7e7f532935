//! Bundled default pump curve.

use pf_curve::SamplePoint;

/// Factory test points of the default pump, active until an upload replaces
/// them. Discharge in m³/h, head in m, efficiency as a fraction.
pub const DEFAULT_PUMP_CURVE: [SamplePoint; 7] = [
    SamplePoint {
        discharge: 0.0,
        head: 52.0,
        efficiency: 0.42,
    },
    SamplePoint {
        discharge: 50.0,
        head: 51.0,
        efficiency: 0.58,
    },
    SamplePoint {
        discharge: 100.0,
        head: 48.0,
        efficiency: 0.70,
    },
    SamplePoint {
        discharge: 150.0,
        head: 44.5,
        efficiency: 0.77,
    },
    SamplePoint {
        discharge: 200.0,
        head: 40.0,
        efficiency: 0.80,
    },
    SamplePoint {
        discharge: 250.0,
        head: 33.0,
        efficiency: 0.74,
    },
    SamplePoint {
        discharge: 300.0,
        head: 25.0,
        efficiency: 0.60,
    },
];
