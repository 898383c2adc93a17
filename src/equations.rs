//! 1D shallow water equations.
//!
//! The conservative form (Saint-Venant equations):
//!
//! ∂h/∂t + ∂(hu)/∂x = 0                    (mass)
//! ∂(hu)/∂t + ∂(hu² + gh²/2)/∂x = 0        (momentum)
//!
//! where h is the water height, hu the momentum and g the gravitational
//! acceleration. No bathymetry or friction source terms; the domain is flat
//! and periodic.

use crate::state::State;

/// Standard gravitational acceleration (m/s²).
pub const G_STANDARD: f64 = 9.81;

/// 1D shallow water equations.
///
/// State vector: q = [h, hu]. Flux: f(q) = [hu, hu²/h + gh²/2].
///
/// The momentum flux divides by h without any minimum-height floor. A zero
/// or negative height therefore produces a non-finite flux that propagates
/// into the next state; that signal is deliberately left intact rather than
/// masked by clamping.
#[derive(Clone, Copy, Debug)]
pub struct ShallowWater1D {
    /// Gravitational acceleration (m/s²).
    pub g: f64,
}

impl ShallowWater1D {
    /// Create shallow water equations with the given gravity.
    pub fn new(g: f64) -> Self {
        Self { g }
    }

    /// Standard gravity (9.81 m/s²).
    pub fn standard() -> Self {
        Self::new(G_STANDARD)
    }

    /// Mass flux: f_h = hu.
    #[inline]
    pub fn mass_flux(&self, hu: f64) -> f64 {
        hu
    }

    /// Momentum flux: f_hu = hu²/h + g h²/2. Unguarded division by h.
    #[inline]
    pub fn momentum_flux(&self, h: f64, hu: f64) -> f64 {
        hu * hu / h + 0.5 * self.g * h * h
    }

    /// Gravity wave celerity c = sqrt(g h).
    #[inline]
    pub fn celerity(&self, h: f64) -> f64 {
        (self.g * h.max(0.0)).sqrt()
    }

    /// Celerity of the deepest cell, sqrt(g max(h)).
    ///
    /// The step-size suggestion uses this as the characteristic speed.
    pub fn max_celerity(&self, state: &State) -> f64 {
        self.celerity(state.max_height())
    }
}

impl Default for ShallowWater1D {
    fn default() -> Self {
        Self::standard()
    }
}
