//! # stvenant
//!
//! A solver library for the one-dimensional shallow water (Saint-Venant)
//! equations on a periodic domain.
//!
//! This crate provides the numerical integration engine:
//! - Periodic uniform grid with wraparound index arithmetic
//! - Spatial differentiation operators (first-order upwind, second-order
//!   central, fifth-order WENO reconstruction)
//! - Flux/RHS assembly for the coupled (h, hu) system
//! - Explicit time integrators (forward Euler, RK2, SSP-RK3, RK4)
//! - A time-marching driver emitting snapshots at a fixed frame rate
//! - Built-in initial conditions and plain-text snapshot output
//!
//! Every spatial operator composes with every time integrator; both are
//! selected once in a [`simulation::SimulationConfig`] and held for the
//! run's lifetime.
//!
//! # Example
//! ```no_run
//! use stvenant::equations::ShallowWater1D;
//! use stvenant::grid::Grid;
//! use stvenant::initial::InitialCondition;
//! use stvenant::operators::SpatialScheme;
//! use stvenant::simulation::{run_simulation, SimulationConfig};
//! use stvenant::time::{compute_dt, TimeScheme};
//!
//! let grid = Grid::uniform_periodic(-10.0, 10.0, 100)?;
//! let eq = ShallowWater1D::standard();
//!
//! let initial = InitialCondition::DamBreak;
//! let dt = compute_dt(&grid, &initial.generate(&grid), &eq, 0.1, 20.0);
//!
//! let config = SimulationConfig::new(
//!     SpatialScheme::Weno5,
//!     TimeScheme::Rk3,
//!     initial,
//!     4.0,
//!     dt,
//!     20.0,
//! );
//!
//! run_simulation(&grid, &eq, &config, |snapshot| {
//!     println!("t = {:.3}, min h = {:.4}", snapshot.time, snapshot.state.min_height());
//! })?;
//! # Ok::<(), stvenant::simulation::ConfigError>(())
//! ```

pub mod equations;
pub mod grid;
pub mod initial;
pub mod io;
pub mod operators;
pub mod simulation;
pub mod solver;
pub mod state;
pub mod time;

// Re-export main types for convenience
pub use equations::{ShallowWater1D, G_STANDARD};
pub use grid::{wrap_index, Grid};
pub use initial::InitialCondition;
pub use io::{
    run_simulation_to_path, write_end_state, OutputError, RunError, SnapshotWriter,
    END_STATE_FILENAME,
};
pub use operators::{
    create_operator, BoxedOperator, Central2, SpatialDerivative, SpatialScheme, Upwind1, Weno5,
};
pub use simulation::{run_simulation, ConfigError, RunSummary, SimulationConfig};
pub use solver::compute_rhs;
pub use state::{Snapshot, State};
pub use time::{
    compute_dt, ForwardEuler, IntegratorInfo, Rk2, Rk3, Rk4, TimeIntegrator, TimeScheme,
};

#[cfg(feature = "parallel")]
pub use solver::compute_rhs_parallel;
