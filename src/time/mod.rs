//! Explicit time integration.

mod integrator;

pub use integrator::{
    create_integrator_info, BoxedIntegratorInfo, ForwardEuler, IntegratorInfo, Rk2, Rk3, Rk4,
    TimeIntegrator, TimeScheme,
};

use crate::equations::ShallowWater1D;
use crate::grid::Grid;
use crate::state::State;

/// Suggest a stable fixed step size for a run.
///
/// dt = min(cfl * dx / sqrt(g * h_max), 0.5 / fps)
///
/// The gravity-wave celerity of the deepest cell bounds the signal speed;
/// the 0.5/fps cap keeps at most one output boundary inside any step. The
/// driver itself performs no CFL check, so this is the caller's tool for
/// honoring stability of the chosen spatial order.
pub fn compute_dt(grid: &Grid, state: &State, eq: &ShallowWater1D, cfl: f64, fps: f64) -> f64 {
    let celerity = eq.max_celerity(state);

    let wave_dt = if celerity > 1e-14 {
        cfl * grid.dx / celerity
    } else {
        f64::INFINITY
    };

    wave_dt.min(0.5 / fps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_dt_wave_limited() {
        let grid = Grid::uniform_periodic(-10.0, 10.0, 100).unwrap();
        let eq = ShallowWater1D::new(9.81);
        let state = State::from_parts(vec![2.0; 100], vec![0.0; 100]);

        let dt = compute_dt(&grid, &state, &eq, 0.1, 1000.0);
        let expected = 0.1 * 0.2 / (9.81_f64 * 2.0).sqrt();
        assert!((dt - expected).abs() < 1e-14);
    }

    #[test]
    fn test_compute_dt_capped_by_frame_rate() {
        let grid = Grid::uniform_periodic(-10.0, 10.0, 100).unwrap();
        let eq = ShallowWater1D::new(9.81);
        let state = State::from_parts(vec![1.0; 100], vec![0.0; 100]);

        // Generous CFL: the 0.5 / fps cap wins.
        let dt = compute_dt(&grid, &state, &eq, 10.0, 20.0);
        assert!((dt - 0.025).abs() < 1e-14);
    }

    #[test]
    fn test_compute_dt_dry_state_uses_cap() {
        let grid = Grid::uniform_periodic(-10.0, 10.0, 100).unwrap();
        let eq = ShallowWater1D::new(9.81);
        let state = State::zeros(100);

        // No wave speed at all: only the frame-rate cap remains.
        let dt = compute_dt(&grid, &state, &eq, 0.1, 20.0);
        assert!((dt - 0.025).abs() < 1e-14);
    }
}
