//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Example
//!
//! ```rust
//! use lode_core::Observer;
//! use lode_observers::traits::{CanStopEarly, HasValues};
//!
//! struct StopAtZeroCrossing;
//!
//! impl<E: HasValues, A: CanStopEarly> Observer<E, A> for StopAtZeroCrossing {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.previous().signum() != event.current().signum()).then(A::stop_early)
//!     }
//! }
//! ```

use lode_solvers::one_step;

/// An event that carries the values on both sides of a step.
pub trait HasValues {
    /// Returns the step index.
    fn step(&self) -> usize;

    /// Returns the time at which the step was evaluated.
    fn time(&self) -> f64;

    /// Returns the value before the step.
    fn previous(&self) -> f64;

    /// Returns the value after the step.
    fn current(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasValues for one_step::Event ---

impl HasValues for one_step::Event {
    fn step(&self) -> usize {
        self.step
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn previous(&self) -> f64 {
        self.previous
    }

    fn current(&self) -> f64 {
        self.current
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for one_step::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
