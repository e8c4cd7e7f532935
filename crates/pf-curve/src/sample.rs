//! Pump performance samples.

use crate::error::{CurveError, CurveResult};

/// One measured pump performance point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// Discharge flow [m³/h]
    pub discharge: f64,
    /// Delivered head [m]
    pub head: f64,
    /// Efficiency as a fraction in [0, 1]
    pub efficiency: f64,
}

impl SamplePoint {
    pub fn new(discharge: f64, head: f64, efficiency: f64) -> Self {
        Self {
            discharge,
            head,
            efficiency,
        }
    }

    /// Whether the point is usable for fitting: finite, non-negative
    /// discharge and head, efficiency within [0, 1].
    pub fn is_valid(&self) -> bool {
        self.discharge.is_finite()
            && self.head.is_finite()
            && self.efficiency.is_finite()
            && self.discharge >= 0.0
            && self.head >= 0.0
            && (0.0..=1.0).contains(&self.efficiency)
    }
}

/// Interpolation requires unique, ascending discharge values.
pub fn check_strictly_increasing(samples: &[SamplePoint]) -> CurveResult<()> {
    for (index, pair) in samples.windows(2).enumerate() {
        if pair[1].discharge <= pair[0].discharge {
            return Err(CurveError::UnorderedSamples { index: index + 1 });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_bounds() {
        assert!(SamplePoint::new(100.0, 48.0, 0.7).is_valid());
        assert!(SamplePoint::new(0.0, 0.0, 0.0).is_valid());
        assert!(!SamplePoint::new(-1.0, 48.0, 0.7).is_valid());
        assert!(!SamplePoint::new(100.0, -2.0, 0.7).is_valid());
        assert!(!SamplePoint::new(100.0, 48.0, 1.2).is_valid());
        assert!(!SamplePoint::new(f64::NAN, 48.0, 0.7).is_valid());
    }

    #[test]
    fn ordering_check() {
        let good = [
            SamplePoint::new(0.0, 50.0, 0.5),
            SamplePoint::new(100.0, 48.0, 0.7),
        ];
        assert!(check_strictly_increasing(&good).is_ok());

        let duplicate = [
            SamplePoint::new(100.0, 48.0, 0.7),
            SamplePoint::new(100.0, 40.0, 0.8),
        ];
        assert_eq!(
            check_strictly_increasing(&duplicate),
            Err(CurveError::UnorderedSamples { index: 1 })
        );
    }
}
