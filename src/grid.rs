//! Periodic 1D grid.
//!
//! The domain [x_min, x_max) is split into `n` uniform cells with centers
//! x_i = x_min + i * dx. The domain is periodic: cell `n` wraps to cell 0,
//! so every stencil can reach across the ends through [`Grid::wrap`]
//! without special-casing the first or last cells.

use crate::simulation::ConfigError;

/// Minimum number of cells: the widest stencil reaches two cells to each
/// side, so anything smaller cannot host a full reconstruction.
pub const MIN_CELLS: usize = 4;

/// Map a signed offset from index `i` into [0, n) under periodic wraparound.
///
/// Uses Euclidean remainder so that arbitrarily large negative offsets
/// still land in [0, n), unlike the truncating `%` operator.
#[inline]
pub fn wrap_index(n: usize, i: usize, k: isize) -> usize {
    (i as isize + k).rem_euclid(n as isize) as usize
}

/// Uniform periodic 1D grid.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Left endpoint of the domain.
    pub x_min: f64,
    /// Right endpoint of the domain (exclusive; it aliases `x_min`).
    pub x_max: f64,
    /// Number of cells.
    pub n: usize,
    /// Cell spacing.
    pub dx: f64,
    /// Cell center coordinates: centers[i] = x_min + i * dx.
    pub centers: Vec<f64>,
}

impl Grid {
    /// Create a uniform periodic grid of [x_min, x_max) with `n` cells.
    ///
    /// Fails with a [`ConfigError`] if `n < MIN_CELLS` or the interval is
    /// empty or reversed.
    pub fn uniform_periodic(x_min: f64, x_max: f64, n: usize) -> Result<Self, ConfigError> {
        if n < MIN_CELLS {
            return Err(ConfigError::TooFewCells(n));
        }
        let dx = (x_max - x_min) / n as f64;
        if !(dx > 0.0) {
            return Err(ConfigError::NonPositiveSpacing(dx));
        }

        let centers: Vec<f64> = (0..n).map(|i| x_min + i as f64 * dx).collect();

        Ok(Self {
            x_min,
            x_max,
            n,
            dx,
            centers,
        })
    }

    /// Wrap the signed offset `k` from cell `i` back into [0, n).
    #[inline]
    pub fn wrap(&self, i: usize, k: isize) -> usize {
        wrap_index(self.n, i, k)
    }

    /// Total domain length.
    pub fn length(&self) -> f64 {
        self.x_max - self.x_min
    }
}
