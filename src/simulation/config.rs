//! Run configuration.

use thiserror::Error;

use crate::grid::Grid;
use crate::initial::InitialCondition;
use crate::operators::SpatialScheme;
use crate::state::State;
use crate::time::TimeScheme;

/// A configuration problem, reported before any stepping begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The grid is too small for the widest stencil.
    #[error("grid needs at least 4 cells, got {0}")]
    TooFewCells(usize),

    /// The domain interval is empty or reversed.
    #[error("cell spacing must be positive, got {0}")]
    NonPositiveSpacing(f64),

    /// Step size must be positive.
    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),

    /// Simulated duration must be positive.
    #[error("duration must be positive, got {0}")]
    NonPositiveDuration(f64),

    /// Output frame rate must be positive.
    #[error("frame rate must be positive, got {0}")]
    NonPositiveFrameRate(f64),

    /// Numeric scenario index outside 1-4.
    #[error("unknown initial condition index {0} (expected 1-4)")]
    UnknownInitialCondition(u32),

    /// A supplied initial state does not match the grid.
    #[error("initial override has {got} cells but the grid has {expected}")]
    OverrideLengthMismatch { expected: usize, got: usize },
}

/// Immutable selection of schemes and run parameters.
///
/// Built once before a run; the driver holds it read-only for the run's
/// lifetime. The optional `initial_state` replaces the generator output
/// when a front end supplies a custom state.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Spatial differentiation scheme.
    pub spatial: SpatialScheme,
    /// Time integration scheme.
    pub time: TimeScheme,
    /// Built-in initial condition (ignored when `initial_state` is set).
    pub initial: InitialCondition,
    /// Total simulated duration.
    pub duration: f64,
    /// Fixed time step. The driver does not derive this; pick one that
    /// satisfies stability for the chosen spatial order, e.g. via
    /// [`crate::time::compute_dt`].
    pub dt: f64,
    /// Output frame rate: a snapshot is due every 1/fps of simulated time.
    pub fps: f64,
    /// Optional custom initial state overriding the generator.
    pub initial_state: Option<State>,
    /// Print a progress line to stdout for every emitted snapshot.
    pub verbose: bool,
}

impl SimulationConfig {
    /// Create a configuration with the given schemes and run parameters.
    pub fn new(
        spatial: SpatialScheme,
        time: TimeScheme,
        initial: InitialCondition,
        duration: f64,
        dt: f64,
        fps: f64,
    ) -> Self {
        Self {
            spatial,
            time,
            initial,
            duration,
            dt,
            fps,
            initial_state: None,
            verbose: false,
        }
    }

    /// The reference configuration: Gaussian hump, central differences,
    /// forward Euler, matching the cross-implementation benchmark setup.
    pub fn reference(duration: f64, dt: f64, fps: f64) -> Self {
        Self::new(
            SpatialScheme::Central2,
            TimeScheme::Euler,
            InitialCondition::GaussianHump,
            duration,
            dt,
            fps,
        )
    }

    /// Supply a custom initial state instead of the generator output.
    pub fn with_initial_state(mut self, state: State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Enable per-snapshot progress output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check the configuration against a grid. Fails fast with the first
    /// problem found; nothing is defaulted silently.
    pub fn validate(&self, grid: &Grid) -> Result<(), ConfigError> {
        if !(self.dt > 0.0) {
            return Err(ConfigError::NonPositiveTimeStep(self.dt));
        }
        if !(self.duration > 0.0) {
            return Err(ConfigError::NonPositiveDuration(self.duration));
        }
        if !(self.fps > 0.0) {
            return Err(ConfigError::NonPositiveFrameRate(self.fps));
        }
        if let Some(state) = &self.initial_state {
            if state.len() != grid.n {
                return Err(ConfigError::OverrideLengthMismatch {
                    expected: grid.n,
                    got: state.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::uniform_periodic(-10.0, 10.0, 100).unwrap()
    }

    fn valid_config() -> SimulationConfig {
        SimulationConfig::reference(10.0, 0.001, 20.0)
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate(&grid()).is_ok());
    }

    #[test]
    fn test_nonpositive_parameters_rejected() {
        let grid = grid();

        let mut c = valid_config();
        c.dt = 0.0;
        assert!(matches!(
            c.validate(&grid),
            Err(ConfigError::NonPositiveTimeStep(_))
        ));

        let mut c = valid_config();
        c.duration = -1.0;
        assert!(matches!(
            c.validate(&grid),
            Err(ConfigError::NonPositiveDuration(_))
        ));

        let mut c = valid_config();
        c.fps = 0.0;
        assert!(matches!(
            c.validate(&grid),
            Err(ConfigError::NonPositiveFrameRate(_))
        ));
    }

    #[test]
    fn test_nan_parameters_rejected() {
        let grid = grid();
        let mut c = valid_config();
        c.dt = f64::NAN;
        assert!(c.validate(&grid).is_err());
    }

    #[test]
    fn test_override_length_checked() {
        let grid = grid();
        let c = valid_config().with_initial_state(State::zeros(50));

        assert!(matches!(
            c.validate(&grid),
            Err(ConfigError::OverrideLengthMismatch {
                expected: 100,
                got: 50
            })
        ));
    }

    #[test]
    fn test_reference_configuration() {
        let c = SimulationConfig::reference(10.0, 0.001, 20.0);
        assert_eq!(c.spatial, SpatialScheme::Central2);
        assert_eq!(c.time, TimeScheme::Euler);
        assert_eq!(c.initial, InitialCondition::GaussianHump);
    }
}
