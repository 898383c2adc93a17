//! First-order upwind differences.

use crate::grid::wrap_index;

use super::SpatialDerivative;

/// First-order upwind operator.
///
/// The face value to the right of cell i is the cell value itself,
/// f[i+1/2] = values[i], with the winding direction fixed left-to-right by
/// the scheme (not data-dependent, matching the linear-advection
/// convention). Differencing adjacent faces gives
///
/// dfdx[i] = (values[i] - values[i-1]) / dx
///
/// O(dx) accurate; the cheap, diffusive baseline.
#[derive(Clone, Copy, Debug, Default)]
pub struct Upwind1;

impl SpatialDerivative for Upwind1 {
    fn derivative(&self, values: &[f64], dx: f64) -> Vec<f64> {
        let n = values.len();
        (0..n)
            .map(|i| (values[i] - values[wrap_index(n, i, -1)]) / dx)
            .collect()
    }

    fn name(&self) -> &'static str {
        "upwind-1"
    }

    fn order(&self) -> usize {
        1
    }
}
