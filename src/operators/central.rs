//! Second-order central differences.

use crate::grid::wrap_index;

use super::SpatialDerivative;

/// Second-order central difference operator.
///
/// dfdx[i] = (values[i+1] - values[i-1]) / (2 dx)
///
/// with both neighbor indices wrapped periodically. O(dx²) accurate and
/// non-dissipative.
#[derive(Clone, Copy, Debug, Default)]
pub struct Central2;

impl SpatialDerivative for Central2 {
    fn derivative(&self, values: &[f64], dx: f64) -> Vec<f64> {
        let n = values.len();
        (0..n)
            .map(|i| {
                let right = values[wrap_index(n, i, 1)];
                let left = values[wrap_index(n, i, -1)];
                (right - left) / (2.0 * dx)
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "central-2"
    }

    fn order(&self) -> usize {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_central_exact_on_linear_interior() {
        let values = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let d = Central2.derivative(&values, 0.5);

        // Interior cells see the exact slope 2.
        for &v in &d[1..5] {
            assert!((v - 2.0).abs() < 1e-14);
        }
    }

    #[test]
    fn test_central_wraps_both_edges() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        let dx = 1.0;
        let d = Central2.derivative(&values, dx);

        // Cell 0: (values[1] - values[3]) / 2 = (2 - 4) / 2 = -1
        assert!((d[0] - (-1.0)).abs() < 1e-14);
        // Cell 3: (values[0] - values[2]) / 2 = (1 - 3) / 2 = -1
        assert!((d[3] - (-1.0)).abs() < 1e-14);
    }

    #[test]
    fn test_central_second_order_on_sine() {
        // d/dx sin(kx) = k cos(kx); halving dx should cut the error ~4x.
        let k = 2.0 * PI;
        let error = |n: usize| {
            let dx = 1.0 / n as f64;
            let values: Vec<f64> = (0..n).map(|i| (k * i as f64 * dx).sin()).collect();
            let d = Central2.derivative(&values, dx);
            (0..n)
                .map(|i| (d[i] - k * (k * i as f64 * dx).cos()).abs())
                .fold(0.0, f64::max)
        };

        let e1 = error(32);
        let e2 = error(64);
        let ratio = e1 / e2;
        assert!(
            ratio > 3.5 && ratio < 4.5,
            "expected ~4x error reduction, got {:.2}",
            ratio
        );
    }
}
