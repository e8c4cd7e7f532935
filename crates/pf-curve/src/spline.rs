//! Natural cubic spline interpolation.
//!
//! The pump curve is supplied as a handful of discrete test points; a smooth
//! degree-3 interpolant through them is what gets charted and intersected
//! with the system-resistance curve.

use crate::error::{CurveError, CurveResult};

/// A natural cubic spline interpolator for real-valued data.
///
/// Given n knots (x_i, y_i) with strictly increasing x, constructs piecewise
/// cubic polynomials with continuous first and second derivatives and zero
/// second derivative at both ends (natural boundary condition).
#[derive(Debug, Clone)]
pub struct CubicSpline {
    /// Strictly increasing x values (knots).
    knots: Vec<f64>,
    /// Corresponding y values.
    values: Vec<f64>,
    /// Second derivatives at each knot, from the tridiagonal natural system.
    second_derivs: Vec<f64>,
}

impl CubicSpline {
    /// Construct a natural cubic spline through the given data points.
    ///
    /// # Errors
    /// Fails if the slices differ in length, hold fewer than 2 points, or the
    /// x values are not strictly increasing.
    pub fn new(knots: Vec<f64>, values: Vec<f64>) -> CurveResult<Self> {
        if knots.len() != values.len() {
            return Err(CurveError::InvalidArg {
                what: "spline knots and values must have equal length",
            });
        }
        if knots.len() < 2 {
            return Err(CurveError::InsufficientData {
                count: knots.len(),
                min: 2,
            });
        }
        for i in 1..knots.len() {
            if knots[i] <= knots[i - 1] {
                return Err(CurveError::UnorderedSamples { index: i });
            }
        }

        let n = knots.len();
        let mut second_derivs = vec![0.0; n];
        let mut scratch = vec![0.0; n - 1];

        // Forward sweep of the tridiagonal system; the natural boundary
        // condition leaves second_derivs[0] and second_derivs[n-1] at zero.
        for i in 1..n - 1 {
            let sig = (knots[i] - knots[i - 1]) / (knots[i + 1] - knots[i - 1]);
            let p = sig * second_derivs[i - 1] + 2.0;
            second_derivs[i] = (sig - 1.0) / p;
            scratch[i] = (values[i + 1] - values[i]) / (knots[i + 1] - knots[i])
                - (values[i] - values[i - 1]) / (knots[i] - knots[i - 1]);
            scratch[i] =
                (6.0 * scratch[i] / (knots[i + 1] - knots[i - 1]) - sig * scratch[i - 1]) / p;
        }

        // Back substitution
        for k in (0..n - 2).rev() {
            second_derivs[k + 1] = second_derivs[k + 1] * second_derivs[k + 2] + scratch[k + 1];
        }

        Ok(Self {
            knots,
            values,
            second_derivs,
        })
    }

    /// Lower and upper bounds of the knot range.
    pub fn domain(&self) -> (f64, f64) {
        (self.knots[0], self.knots[self.knots.len() - 1])
    }

    /// Evaluate the spline at `x`.
    ///
    /// The interpolant is only meaningful inside `domain()`; outside it the
    /// boundary polynomial is extended.
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.knots.len();

        // Binary search for the enclosing interval
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.knots[mid] > x {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        let h = self.knots[hi] - self.knots[lo];
        let a = (self.knots[hi] - x) / h;
        let b = (x - self.knots[lo]) / h;

        a * self.values[lo]
            + b * self.values[hi]
            + ((a * a * a - a) * self.second_derivs[lo]
                + (b * b * b - b) * self.second_derivs[hi])
                * h
                * h
                / 6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_data_points() {
        let xs = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = vec![2.0, 3.0, 5.0, 4.0, 1.0];
        let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            let result = spline.evaluate(*x);
            assert!(
                (result - y).abs() < 1e-10,
                "spline({x}) = {result}, expected {y}"
            );
        }
    }

    #[test]
    fn reproduces_linear_data_exactly() {
        // A straight line satisfies the natural boundary conditions, so the
        // spline must reproduce it everywhere, not just at the knots.
        let xs = vec![0.0, 1.0, 2.0, 4.0];
        let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x + 1.0).collect();
        let spline = CubicSpline::new(xs, ys).unwrap();

        for x in [0.25, 0.5, 1.7, 3.1] {
            assert!((spline.evaluate(x) - (3.0 * x + 1.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(
            CubicSpline::new(vec![1.0], vec![2.0]).unwrap_err(),
            CurveError::InsufficientData { count: 1, min: 2 }
        );
        assert_eq!(
            CubicSpline::new(vec![1.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).unwrap_err(),
            CurveError::UnorderedSamples { index: 1 }
        );
        assert!(matches!(
            CubicSpline::new(vec![1.0, 2.0], vec![0.0]).unwrap_err(),
            CurveError::InvalidArg { .. }
        ));
    }

    #[test]
    fn domain_reports_knot_range() {
        let spline = CubicSpline::new(vec![0.0, 150.0, 300.0], vec![50.0, 44.0, 25.0]).unwrap();
        assert_eq!(spline.domain(), (0.0, 300.0));
    }
}
