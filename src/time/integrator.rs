//! Explicit Runge-Kutta time integrators.
//!
//! All integrators advance the coupled state (h, hu) by one step through
//! one or more evaluations of a black-box RHS function (method of lines).
//! Both fields share the same stage coefficients and the same dt, since
//! they are coupled through the RHS. Stability is the caller's
//! responsibility; no integrator performs an internal CFL check.
//!
//! Every step returns a fresh [`State`]; the input is never mutated, so
//! the current and next arrays cannot alias.
//!
//! # Example
//! ```
//! use stvenant::state::State;
//! use stvenant::time::{Rk3, TimeIntegrator};
//!
//! let u = State::from_parts(vec![1.0; 4], vec![1.0; 4]);
//!
//! // Linear decay du/dt = -u on both fields.
//! let next = Rk3.step(&u, 0.01, |s| {
//!     let mut rhs = s.clone();
//!     rhs.scale(-1.0);
//!     rhs
//! });
//! assert!(next.h[0] < 1.0);
//! ```

use crate::state::State;

/// Non-generic information about a time integrator.
pub trait IntegratorInfo: Send + Sync {
    /// Human-readable name for debugging and output labels.
    fn name(&self) -> &'static str;

    /// Order of accuracy.
    fn order(&self) -> usize;

    /// Number of RHS evaluations per step.
    fn n_stages(&self) -> usize;
}

/// Trait for explicit time integrators.
pub trait TimeIntegrator: IntegratorInfo {
    /// Advance the state by one time step, returning the new state.
    ///
    /// # Arguments
    /// * `state` - Current state (left untouched)
    /// * `dt` - Time step size
    /// * `rhs` - Function computing the time derivative of a state
    fn step<F>(&self, state: &State, dt: f64, rhs: F) -> State
    where
        F: Fn(&State) -> State;
}

/// Forward Euler integrator (1st order).
///
/// y_next = y + dt * k1
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl IntegratorInfo for ForwardEuler {
    fn name(&self) -> &'static str {
        "forward-euler"
    }

    fn order(&self) -> usize {
        1
    }

    fn n_stages(&self) -> usize {
        1
    }
}

impl TimeIntegrator for ForwardEuler {
    fn step<F>(&self, state: &State, dt: f64, rhs: F) -> State
    where
        F: Fn(&State) -> State,
    {
        let k1 = rhs(state);
        let mut next = state.clone();
        next.axpy(dt, &k1);
        next
    }
}

/// Midpoint Runge-Kutta integrator (2nd order).
///
/// k1 at y; k2 at y + dt/2 * k1; y_next = y + dt * k2
#[derive(Clone, Copy, Debug, Default)]
pub struct Rk2;

impl IntegratorInfo for Rk2 {
    fn name(&self) -> &'static str {
        "rk2-midpoint"
    }

    fn order(&self) -> usize {
        2
    }

    fn n_stages(&self) -> usize {
        2
    }
}

impl TimeIntegrator for Rk2 {
    fn step<F>(&self, state: &State, dt: f64, rhs: F) -> State
    where
        F: Fn(&State) -> State,
    {
        let k1 = rhs(state);

        let mut mid = state.clone();
        mid.axpy(0.5 * dt, &k1);
        let k2 = rhs(&mid);

        let mut next = state.clone();
        next.axpy(dt, &k2);
        next
    }
}

/// Strong Stability Preserving RK3 integrator (Shu-Osher form).
///
/// u1 = u + dt * L(u)
/// u2 = 3/4 * u + 1/4 * u1 + 1/4 * dt * L(u1)
/// u_next = 1/3 * u + 2/3 * u2 + 2/3 * dt * L(u2)
#[derive(Clone, Copy, Debug, Default)]
pub struct Rk3;

impl IntegratorInfo for Rk3 {
    fn name(&self) -> &'static str {
        "ssp-rk3"
    }

    fn order(&self) -> usize {
        3
    }

    fn n_stages(&self) -> usize {
        3
    }
}

impl TimeIntegrator for Rk3 {
    fn step<F>(&self, state: &State, dt: f64, rhs: F) -> State
    where
        F: Fn(&State) -> State,
    {
        // Stage 1: u1 = u + dt * L(u)
        let l_u = rhs(state);
        let mut u1 = state.clone();
        u1.axpy(dt, &l_u);

        // Stage 2: u2 = 3/4 * u + 1/4 * u1 + 1/4 * dt * L(u1)
        let l_u1 = rhs(&u1);
        let mut u2 = state.clone();
        u2.scale(0.75);
        u2.axpy(0.25, &u1);
        u2.axpy(0.25 * dt, &l_u1);

        // Stage 3: u_next = 1/3 * u + 2/3 * u2 + 2/3 * dt * L(u2)
        let l_u2 = rhs(&u2);
        let mut next = state.clone();
        next.scale(1.0 / 3.0);
        next.axpy(2.0 / 3.0, &u2);
        next.axpy(2.0 / 3.0 * dt, &l_u2);
        next
    }
}

/// Classic 4th-order Runge-Kutta integrator.
///
/// k1 at y, k2 at y + dt/2 * k1, k3 at y + dt/2 * k2, k4 at y + dt * k3;
/// y_next = y + dt/6 * (k1 + 2 k2 + 2 k3 + k4)
#[derive(Clone, Copy, Debug, Default)]
pub struct Rk4;

impl IntegratorInfo for Rk4 {
    fn name(&self) -> &'static str {
        "rk4-classic"
    }

    fn order(&self) -> usize {
        4
    }

    fn n_stages(&self) -> usize {
        4
    }
}

impl TimeIntegrator for Rk4 {
    fn step<F>(&self, state: &State, dt: f64, rhs: F) -> State
    where
        F: Fn(&State) -> State,
    {
        let k1 = rhs(state);

        let mut s2 = state.clone();
        s2.axpy(0.5 * dt, &k1);
        let k2 = rhs(&s2);

        let mut s3 = state.clone();
        s3.axpy(0.5 * dt, &k2);
        let k3 = rhs(&s3);

        let mut s4 = state.clone();
        s4.axpy(dt, &k3);
        let k4 = rhs(&s4);

        let mut next = state.clone();
        next.axpy(dt / 6.0, &k1);
        next.axpy(dt / 3.0, &k2);
        next.axpy(dt / 3.0, &k3);
        next.axpy(dt / 6.0, &k4);
        next
    }
}

/// Enum wrapper for the built-in integrators.
///
/// Provides zero-cost dispatch when the scheme is known at compile time,
/// while still allowing runtime selection from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeScheme {
    /// Forward Euler (1st order, reference configuration).
    #[default]
    Euler,
    /// Midpoint RK2.
    Rk2,
    /// SSP-RK3 (Shu-Osher).
    Rk3,
    /// Classic RK4.
    Rk4,
}

impl IntegratorInfo for TimeScheme {
    fn name(&self) -> &'static str {
        match self {
            TimeScheme::Euler => ForwardEuler.name(),
            TimeScheme::Rk2 => Rk2.name(),
            TimeScheme::Rk3 => Rk3.name(),
            TimeScheme::Rk4 => Rk4.name(),
        }
    }

    fn order(&self) -> usize {
        match self {
            TimeScheme::Euler => ForwardEuler.order(),
            TimeScheme::Rk2 => Rk2.order(),
            TimeScheme::Rk3 => Rk3.order(),
            TimeScheme::Rk4 => Rk4.order(),
        }
    }

    fn n_stages(&self) -> usize {
        match self {
            TimeScheme::Euler => ForwardEuler.n_stages(),
            TimeScheme::Rk2 => Rk2.n_stages(),
            TimeScheme::Rk3 => Rk3.n_stages(),
            TimeScheme::Rk4 => Rk4.n_stages(),
        }
    }
}

impl TimeIntegrator for TimeScheme {
    #[inline]
    fn step<F>(&self, state: &State, dt: f64, rhs: F) -> State
    where
        F: Fn(&State) -> State,
    {
        match self {
            TimeScheme::Euler => ForwardEuler.step(state, dt, rhs),
            TimeScheme::Rk2 => Rk2.step(state, dt, rhs),
            TimeScheme::Rk3 => Rk3.step(state, dt, rhs),
            TimeScheme::Rk4 => Rk4.step(state, dt, rhs),
        }
    }
}

/// Type alias for boxed integrator info (runtime polymorphism).
///
/// The full `TimeIntegrator` trait is not dyn-compatible because of the
/// generic closure in `step`; use the [`TimeScheme`] enum for runtime
/// selection of integrators.
pub type BoxedIntegratorInfo = Box<dyn IntegratorInfo>;

/// Create boxed integrator info from a scheme selection.
pub fn create_integrator_info(scheme: TimeScheme) -> BoxedIntegratorInfo {
    match scheme {
        TimeScheme::Euler => Box::new(ForwardEuler),
        TimeScheme::Rk2 => Box::new(Rk2),
        TimeScheme::Rk3 => Box::new(Rk3),
        TimeScheme::Rk4 => Box::new(Rk4),
    }
}
