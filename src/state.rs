//! Simulation state: the conserved variable pair (h, hu).
//!
//! `State` holds the water height and momentum on every cell of the grid.
//! Time integrators never mutate a state in place; each step produces a
//! fresh value, so the "current" and "next" arrays can never alias.

use crate::grid::Grid;

/// Conserved variables on the grid: height `h` and momentum `hu`,
/// index-aligned with the grid's cell centers.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    /// Water height per cell.
    pub h: Vec<f64>,
    /// Momentum (height times velocity) per cell.
    pub hu: Vec<f64>,
}

impl State {
    /// Create a zero state with `n` cells.
    pub fn zeros(n: usize) -> Self {
        Self {
            h: vec![0.0; n],
            hu: vec![0.0; n],
        }
    }

    /// Build a state from height and momentum arrays.
    pub fn from_parts(h: Vec<f64>, hu: Vec<f64>) -> Self {
        debug_assert_eq!(h.len(), hu.len());
        Self { h, hu }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.h.len()
    }

    /// Whether the state has no cells.
    pub fn is_empty(&self) -> bool {
        self.h.is_empty()
    }

    /// Scale both fields: self <- c * self.
    pub fn scale(&mut self, c: f64) {
        for v in &mut self.h {
            *v *= c;
        }
        for v in &mut self.hu {
            *v *= c;
        }
    }

    /// Add a scaled state: self <- self + c * other.
    pub fn axpy(&mut self, c: f64, other: &Self) {
        debug_assert_eq!(self.len(), other.len());
        for (v, o) in self.h.iter_mut().zip(&other.h) {
            *v += c * o;
        }
        for (v, o) in self.hu.iter_mut().zip(&other.hu) {
            *v += c * o;
        }
    }

    /// Maximum height across all cells.
    pub fn max_height(&self) -> f64 {
        self.h.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Minimum height across all cells.
    pub fn min_height(&self) -> f64 {
        self.h.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Whether every value in both fields is finite.
    ///
    /// A zero or negative height feeds a division inside the momentum flux
    /// and shows up here as NaN or infinity one step later; this probe is
    /// the supported way to detect that breakdown (values are never
    /// clamped).
    pub fn all_finite(&self) -> bool {
        self.h.iter().all(|v| v.is_finite()) && self.hu.iter().all(|v| v.is_finite())
    }

    /// Total mass: integral of h over the domain.
    pub fn total_mass(&self, dx: f64) -> f64 {
        self.h.iter().sum::<f64>() * dx
    }

    /// Total momentum: integral of hu over the domain.
    pub fn total_momentum(&self, dx: f64) -> f64 {
        self.hu.iter().sum::<f64>() * dx
    }

    /// Total energy: integral of hu²/(2h) + g h²/2 over the domain.
    ///
    /// Dry cells (h below 1e-10) contribute no kinetic term so the
    /// diagnostic stays finite even when the flux path would not.
    pub fn total_energy(&self, dx: f64, g: f64) -> f64 {
        let mut energy = 0.0;
        for (&h, &hu) in self.h.iter().zip(&self.hu) {
            let kinetic = if h > 1e-10 { 0.5 * hu * hu / h } else { 0.0 };
            energy += kinetic + 0.5 * g * h * h;
        }
        energy * dx
    }

    /// L2 error of the height field against an exact profile.
    pub fn l2_error_height<F>(&self, grid: &Grid, exact: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let mut error_sq = 0.0;
        for (&h, &x) in self.h.iter().zip(&grid.centers) {
            let diff = h - exact(x);
            error_sq += diff * diff * grid.dx;
        }
        error_sq.sqrt()
    }

    /// L-infinity error of the height field against an exact profile.
    pub fn linf_error_height<F>(&self, grid: &Grid, exact: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        self.h
            .iter()
            .zip(&grid.centers)
            .map(|(&h, &x)| (h - exact(x)).abs())
            .fold(0.0, f64::max)
    }
}

/// A state tagged with its simulation time; the unit of output.
///
/// Snapshots are immutable once produced and are owned by whatever
/// consumes the output stream; the driver does not retain them.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Elapsed simulated time at which the state was captured.
    pub time: f64,
    /// The captured state.
    pub state: State,
}
