//! Fifth-order WENO reconstruction.
//!
//! Classic Jiang-Shu WENO-5: the value at each right cell face is built
//! from three overlapping 3-point candidate stencils. Each candidate gets a
//! smoothness indicator; the indicators turn into nonlinear weights that
//! blend the candidates, steering weight away from any stencil that
//! crosses a discontinuity. In smooth regions the weights approach the
//! ideal linear weights and the blend is fifth-order accurate.

use crate::grid::wrap_index;

use super::SpatialDerivative;

/// Regularization constant keeping the weight denominators away from zero.
const EPSILON: f64 = 1e-6;

/// Ideal linear weights of the left-biased, centered and right-biased
/// candidate stencils.
const IDEAL_WEIGHTS: [f64; 3] = [1.0 / 10.0, 6.0 / 10.0, 3.0 / 10.0];

/// Fifth-order WENO operator.
///
/// Reconstructs the face value f[i+1/2] from the five wrapped cells
/// i-2 .. i+2 (left-biased winding, fixed by the scheme), then differences
/// adjacent faces:
///
/// dfdx[i] = (f[i+1/2] - f[i-1/2]) / dx
#[derive(Clone, Copy, Debug, Default)]
pub struct Weno5;

/// Jiang-Shu smoothness indicators for the five-point window
/// (fm2, fm1, f0, fp1, fp2) centered on the cell owning the face.
#[inline]
pub(crate) fn smoothness_indicators(fm2: f64, fm1: f64, f0: f64, fp1: f64, fp2: f64) -> [f64; 3] {
    let b0 = 13.0 / 12.0 * (fm2 - 2.0 * fm1 + f0).powi(2)
        + 0.25 * (fm2 - 4.0 * fm1 + 3.0 * f0).powi(2);
    let b1 = 13.0 / 12.0 * (fm1 - 2.0 * f0 + fp1).powi(2) + 0.25 * (fm1 - fp1).powi(2);
    let b2 = 13.0 / 12.0 * (f0 - 2.0 * fp1 + fp2).powi(2)
        + 0.25 * (3.0 * f0 - 4.0 * fp1 + fp2).powi(2);
    [b0, b1, b2]
}

/// Convert smoothness indicators into normalized nonlinear weights.
#[inline]
pub(crate) fn nonlinear_weights(beta: [f64; 3]) -> [f64; 3] {
    let a0 = IDEAL_WEIGHTS[0] / (EPSILON + beta[0]).powi(2);
    let a1 = IDEAL_WEIGHTS[1] / (EPSILON + beta[1]).powi(2);
    let a2 = IDEAL_WEIGHTS[2] / (EPSILON + beta[2]).powi(2);
    let total = a0 + a1 + a2;
    [a0 / total, a1 / total, a2 / total]
}

/// Blend the three candidate face interpolations by the nonlinear weights.
#[inline]
pub(crate) fn face_value(fm2: f64, fm1: f64, f0: f64, fp1: f64, fp2: f64) -> f64 {
    let beta = smoothness_indicators(fm2, fm1, f0, fp1, fp2);
    let w = nonlinear_weights(beta);

    let p0 = (2.0 * fm2 - 7.0 * fm1 + 11.0 * f0) / 6.0;
    let p1 = (-fm1 + 5.0 * f0 + 2.0 * fp1) / 6.0;
    let p2 = (2.0 * f0 + 5.0 * fp1 - fp2) / 6.0;

    w[0] * p0 + w[1] * p1 + w[2] * p2
}

impl SpatialDerivative for Weno5 {
    fn derivative(&self, values: &[f64], dx: f64) -> Vec<f64> {
        let n = values.len();

        // Face values f[i+1/2]; the cells nearest the ends draw their
        // stencil points through the wrap.
        let faces: Vec<f64> = (0..n)
            .map(|i| {
                face_value(
                    values[wrap_index(n, i, -2)],
                    values[wrap_index(n, i, -1)],
                    values[i],
                    values[wrap_index(n, i, 1)],
                    values[wrap_index(n, i, 2)],
                )
            })
            .collect();

        (0..n)
            .map(|i| (faces[i] - faces[wrap_index(n, i, -1)]) / dx)
            .collect()
    }

    fn name(&self) -> &'static str {
        "weno-5"
    }

    fn order(&self) -> usize {
        5
    }
}
