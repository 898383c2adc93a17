//! Built-in initial conditions.
//!
//! Four named scenarios, each a deterministic closed-form function of the
//! cell-center coordinates. All of them are smooth and periodic on the
//! default [-10, 10) domain except the dam break, whose step discontinuity
//! is exactly what the WENO scheme is for.

use crate::grid::Grid;
use crate::simulation::ConfigError;
use crate::state::State;

use std::f64::consts::PI;

/// Selection of a built-in initial condition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitialCondition {
    /// Gaussian hump in height, still water: h = 1 + 0.3 exp(-x²), hu = 0.
    #[default]
    GaussianHump,
    /// Dam-break step: h = 1.2 inside |x| < 2.5, else 1.0; hu = 0.
    DamBreak,
    /// Traveling wave: h = 1 + 0.1 sin(πx/10) moving at uniform speed 3.
    TravelingWave,
    /// Rock splash: flat surface h = 1 with a momentum burst
    /// hu = 0.5 sin(πx/10) pushing water away from the middle.
    RockSplash,
}

impl InitialCondition {
    /// Resolve a numeric scenario index (1-4) as used by external
    /// front ends. Unknown indices are a configuration error.
    pub fn from_index(index: u32) -> Result<Self, ConfigError> {
        match index {
            1 => Ok(Self::GaussianHump),
            2 => Ok(Self::DamBreak),
            3 => Ok(Self::TravelingWave),
            4 => Ok(Self::RockSplash),
            other => Err(ConfigError::UnknownInitialCondition(other)),
        }
    }

    /// The scenario's numeric index.
    pub fn index(&self) -> u32 {
        match self {
            Self::GaussianHump => 1,
            Self::DamBreak => 2,
            Self::TravelingWave => 3,
            Self::RockSplash => 4,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GaussianHump => "gaussian-hump",
            Self::DamBreak => "dam-break",
            Self::TravelingWave => "traveling-wave",
            Self::RockSplash => "rock-splash",
        }
    }

    /// Evaluate the scenario on the grid's cell centers.
    pub fn generate(&self, grid: &Grid) -> State {
        let x = &grid.centers;
        let (h, hu): (Vec<f64>, Vec<f64>) = match self {
            Self::GaussianHump => (
                x.iter().map(|&x| 1.0 + 0.3 * (-x * x).exp()).collect(),
                vec![0.0; grid.n],
            ),
            Self::DamBreak => (
                x.iter()
                    .map(|&x| if x.abs() < 2.5 { 1.2 } else { 1.0 })
                    .collect(),
                vec![0.0; grid.n],
            ),
            Self::TravelingWave => {
                let h: Vec<f64> = x.iter().map(|&x| 1.0 + 0.1 * (x / 10.0 * PI).sin()).collect();
                let hu = h.iter().map(|&h| 3.0 * h).collect();
                (h, hu)
            }
            Self::RockSplash => (
                vec![1.0; grid.n],
                x.iter().map(|&x| 0.5 * (x / 10.0 * PI).sin()).collect(),
            ),
        };

        State::from_parts(h, hu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_grid() -> Grid {
        Grid::uniform_periodic(-10.0, 10.0, 100).unwrap()
    }

    #[test]
    fn test_from_index_roundtrip() {
        for index in 1..=4 {
            let ic = InitialCondition::from_index(index).unwrap();
            assert_eq!(ic.index(), index);
        }
    }

    #[test]
    fn test_unknown_index_rejected() {
        for index in [0, 5, 42] {
            assert!(matches!(
                InitialCondition::from_index(index),
                Err(ConfigError::UnknownInitialCondition(i)) if i == index
            ));
        }
    }

    #[test]
    fn test_gaussian_hump_profile() {
        let grid = default_grid();
        let state = InitialCondition::GaussianHump.generate(&grid);

        // Peak of 1.3 at x = 0 (cell 50), flat tails near 1.
        assert!((state.h[50] - 1.3).abs() < 1e-12);
        assert!((state.h[0] - 1.0).abs() < 1e-10);
        assert!(state.hu.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_dam_break_step() {
        let grid = default_grid();
        let state = InitialCondition::DamBreak.generate(&grid);

        // x = 0 inside the dam, x = -10 outside.
        assert!((state.h[50] - 1.2).abs() < 1e-14);
        assert!((state.h[0] - 1.0).abs() < 1e-14);
        // Exactly two height levels.
        assert!(state.h.iter().all(|&h| h == 1.0 || h == 1.2));
    }

    #[test]
    fn test_traveling_wave_velocity() {
        let grid = default_grid();
        let state = InitialCondition::TravelingWave.generate(&grid);

        // hu = 3 h everywhere: uniform velocity 3.
        for (&h, &hu) in state.h.iter().zip(&state.hu) {
            assert!((hu - 3.0 * h).abs() < 1e-14);
        }
    }

    #[test]
    fn test_rock_splash_flat_height() {
        let grid = default_grid();
        let state = InitialCondition::RockSplash.generate(&grid);

        assert!(state.h.iter().all(|&h| h == 1.0));
        // Momentum is an odd profile: water pushed apart from the middle.
        assert!((state.hu[50]).abs() < 1e-12);
        assert!(state.hu[55] > 0.0);
        assert!(state.hu[45] < 0.0);
    }

    #[test]
    fn test_all_scenarios_positive_height() {
        let grid = default_grid();
        for index in 1..=4 {
            let ic = InitialCondition::from_index(index).unwrap();
            let state = ic.generate(&grid);
            assert!(state.min_height() > 0.0, "{} has dry cells", ic.name());
            assert!(state.all_finite());
        }
    }
}
