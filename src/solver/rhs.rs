//! Right-hand side of the semi-discrete shallow water system.
//!
//! Space is discretized first, yielding an ODE system in time:
//!
//! dh/dt  = -d(hu)/dx
//! dhu/dt = -d(hu²/h + g h²/2)/dx
//!
//! Each derivative comes from the configured spatial operator applied to
//! the per-cell flux values. This is the single seam through which every
//! accuracy/stability trade-off enters the simulation: it has no state and
//! no side effects, and any spatial operator composes with any time
//! integrator.

use crate::equations::ShallowWater1D;
use crate::grid::Grid;
use crate::operators::SpatialDerivative;
use crate::state::State;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compute the right-hand side pair (dh/dt, dhu/dt).
///
/// The returned `State` reuses the state layout to carry the two time
/// derivatives. The momentum flux divides by h without a floor; a
/// non-positive height yields non-finite entries that propagate to the
/// caller unchanged.
pub fn compute_rhs<S>(state: &State, grid: &Grid, eq: &ShallowWater1D, op: &S) -> State
where
    S: SpatialDerivative + ?Sized,
{
    let momentum_flux: Vec<f64> = state
        .h
        .iter()
        .zip(&state.hu)
        .map(|(&h, &hu)| eq.momentum_flux(h, hu))
        .collect();

    let mut dh_dt = op.derivative(&state.hu, grid.dx);
    let mut dhu_dt = op.derivative(&momentum_flux, grid.dx);

    for v in &mut dh_dt {
        *v = -*v;
    }
    for v in &mut dhu_dt {
        *v = -*v;
    }

    State::from_parts(dh_dt, dhu_dt)
}

/// Parallel variant of [`compute_rhs`].
///
/// The flux assembly is a per-cell map with read-only neighbor access, so
/// the two derivative evaluations run on separate threads and the flux
/// array is built in parallel. Results are identical to the serial path.
#[cfg(feature = "parallel")]
pub fn compute_rhs_parallel<S>(state: &State, grid: &Grid, eq: &ShallowWater1D, op: &S) -> State
where
    S: SpatialDerivative + ?Sized,
{
    let momentum_flux: Vec<f64> = state
        .h
        .par_iter()
        .zip(&state.hu)
        .map(|(&h, &hu)| eq.momentum_flux(h, hu))
        .collect();

    let (mut dh_dt, mut dhu_dt) = rayon::join(
        || op.derivative(&state.hu, grid.dx),
        || op.derivative(&momentum_flux, grid.dx),
    );

    dh_dt.par_iter_mut().for_each(|v| *v = -*v);
    dhu_dt.par_iter_mut().for_each(|v| *v = -*v);

    State::from_parts(dh_dt, dhu_dt)
}
