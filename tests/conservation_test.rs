//! Conservation and steady-state tests.
//!
//! On a periodic domain the discrete derivative of any flux telescopes to
//! zero, so total mass and momentum are invariant for every spatial scheme
//! and every integrator, smooth or not.

use stvenant::{
    compute_rhs, Grid, InitialCondition, IntegratorInfo, ShallowWater1D, SpatialDerivative,
    SpatialScheme, State, TimeIntegrator, TimeScheme,
};

fn grid() -> Grid {
    Grid::uniform_periodic(-10.0, 10.0, 100).unwrap()
}

fn advance(
    mut state: State,
    grid: &Grid,
    spatial: SpatialScheme,
    time: TimeScheme,
    dt: f64,
    n_steps: usize,
) -> State {
    let eq = ShallowWater1D::standard();
    for _ in 0..n_steps {
        state = time.step(&state, dt, |s| compute_rhs(s, grid, &eq, &spatial));
    }
    state
}

#[test]
fn test_mass_conserved_all_schemes_smooth() {
    let grid = grid();

    for spatial in [
        SpatialScheme::Upwind1,
        SpatialScheme::Central2,
        SpatialScheme::Weno5,
    ] {
        for time in [
            TimeScheme::Euler,
            TimeScheme::Rk2,
            TimeScheme::Rk3,
            TimeScheme::Rk4,
        ] {
            let initial = InitialCondition::TravelingWave.generate(&grid);
            let mass_0 = initial.total_mass(grid.dx);
            let momentum_0 = initial.total_momentum(grid.dx);

            let state = advance(initial, &grid, spatial, time, 1e-3, 100);

            let mass = state.total_mass(grid.dx);
            let momentum = state.total_momentum(grid.dx);

            assert!(
                (mass - mass_0).abs() < 1e-9,
                "{}/{}: mass drifted {:e}",
                spatial.name(),
                time.name(),
                mass - mass_0
            );
            assert!(
                (momentum - momentum_0).abs() < 1e-9,
                "{}/{}: momentum drifted {:e}",
                spatial.name(),
                time.name(),
                momentum - momentum_0
            );
        }
    }
}

#[test]
fn test_mass_conserved_weno_dam_break() {
    // The discontinuous case the WENO weighting exists for.
    let grid = grid();
    let initial = InitialCondition::DamBreak.generate(&grid);
    let mass_0 = initial.total_mass(grid.dx);

    let state = advance(
        initial,
        &grid,
        SpatialScheme::Weno5,
        TimeScheme::Rk3,
        1e-3,
        500,
    );

    assert!(state.all_finite(), "dam break produced non-finite values");
    assert!(
        (state.total_mass(grid.dx) - mass_0).abs() < 1e-9,
        "mass not conserved across the discontinuity"
    );
}

#[test]
fn test_rock_splash_momentum_stays_balanced() {
    // The splash pushes water symmetrically apart; net momentum starts at
    // zero and must stay there.
    let grid = grid();
    let initial = InitialCondition::RockSplash.generate(&grid);
    assert!(initial.total_momentum(grid.dx).abs() < 1e-12);

    let state = advance(
        initial,
        &grid,
        SpatialScheme::Weno5,
        TimeScheme::Rk4,
        1e-3,
        300,
    );

    assert!(state.all_finite());
    assert!(state.total_momentum(grid.dx).abs() < 1e-9);
}

#[test]
fn test_flat_state_rhs_identically_zero() {
    let grid = grid();
    let eq = ShallowWater1D::standard();
    let flat = State::from_parts(vec![2.0; grid.n], vec![0.0; grid.n]);

    for spatial in [
        SpatialScheme::Upwind1,
        SpatialScheme::Central2,
        SpatialScheme::Weno5,
    ] {
        let rhs = compute_rhs(&flat, &grid, &eq, &spatial);
        assert!(rhs.h.iter().all(|&v| v == 0.0), "{}", spatial.name());
        assert!(rhs.hu.iter().all(|&v| v == 0.0), "{}", spatial.name());
    }
}

#[test]
fn test_gaussian_hump_splits_symmetrically() {
    // Still water with an even height bump: the hump splits into two
    // mirror-image waves. Under the central scheme (a symmetric stencil)
    // the height field stays even and the total momentum stays zero.
    let grid = grid();
    let initial = InitialCondition::GaussianHump.generate(&grid);

    let state = advance(
        initial,
        &grid,
        SpatialScheme::Central2,
        TimeScheme::Rk4,
        1e-3,
        400,
    );

    assert!(state.all_finite());
    assert!(state.total_momentum(grid.dx).abs() < 1e-8);

    // h(x) even about x = 0: cell i mirrors cell n - i.
    for i in 1..grid.n / 2 {
        let diff = (state.h[i] - state.h[grid.n - i]).abs();
        assert!(diff < 1e-8, "asymmetry {:e} at cell {}", diff, i);
    }
}
