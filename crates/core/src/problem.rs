//! The continuous initial-value problem.

mod coefficients;
mod linear;

pub use coefficients::{Coefficients, EvaluationError, Term};
pub use linear::LinearIvp;

use thiserror::Error;

/// Defines a scalar linear initial-value problem to be integrated.
///
/// The problem is
///
/// ```text
/// du/dt + a(t) u = f(t),   u(0) = initial_condition,   t in [0, expiry]
/// ```
///
/// Implementations describe only the continuous problem. How it is
/// discretized is the business of a [`OneStepScheme`](crate::OneStepScheme).
///
/// Both `a` and `f` must be pure functions of time for the duration of a run.
pub trait ContinuousProblem {
    /// Coefficient of the free term.
    fn a(&self, t: f64) -> f64;

    /// Inhomogeneous (forcing) term.
    fn f(&self, t: f64) -> f64;

    /// Value of the solution at `t = 0`.
    fn initial_condition(&self) -> f64;

    /// End of the integration interval `[0, expiry]`.
    fn expiry(&self) -> f64;
}

/// Errors describing an ill-posed problem configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProblemError {
    #[error("expiry must be positive, got {0}")]
    NonPositiveExpiry(f64),

    #[error("expiry must be finite, got {0}")]
    NonFiniteExpiry(f64),

    #[error("initial condition must be finite, got {0}")]
    NonFiniteInitialCondition(f64),
}

/// Checks that a problem is well-defined for integration.
///
/// # Errors
///
/// Returns a [`ProblemError`] if the expiry is non-finite or not strictly
/// positive, or if the initial condition is non-finite.
pub fn validate<P: ContinuousProblem + ?Sized>(problem: &P) -> Result<(), ProblemError> {
    let expiry = problem.expiry();
    if !expiry.is_finite() {
        return Err(ProblemError::NonFiniteExpiry(expiry));
    }
    if expiry <= 0.0 {
        return Err(ProblemError::NonPositiveExpiry(expiry));
    }

    let initial = problem.initial_condition();
    if !initial.is_finite() {
        return Err(ProblemError::NonFiniteInitialCondition(initial));
    }

    Ok(())
}
