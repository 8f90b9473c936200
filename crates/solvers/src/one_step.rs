//! One-step integrator for linear initial-value problems.
//!
//! The integrator walks a uniform mesh over `[0, expiry]` and asks a
//! [`OneStepScheme`] for the value at each next level:
//!
//! ```text
//! u_{n+1} = scheme.step(view, n, u_n)
//! ```
//!
//! The scheme only ever sees a read-only [`StepView`] of the problem and
//! mesh, so any scheme can be swapped in without touching the problem or
//! this driver.
//!
//! # Example
//!
//! ```
//! use lode_core::LinearIvp;
//! use lode_solvers::{one_step, schemes::ExplicitEuler};
//!
//! let ivp = LinearIvp::new(|_| 1.0, |t| 2.0 + t, 2.0, 2.0);
//!
//! let solution = one_step::solve_unobserved(&ivp, ExplicitEuler, 100)?;
//!
//! let exact = 3.0 + (-2.0_f64).exp();
//! assert!((solution.value - exact).abs() < 5e-3);
//! # Ok::<(), one_step::Error>(())
//! ```
//!
//! # Observer
//!
//! The observer receives an [`Event`] after each applied step and may return
//! [`Action::StopEarly`] to end the run.
//!
//! [`OneStepScheme`]: lode_core::OneStepScheme
//! [`StepView`]: lode_core::StepView

mod action;
mod config;
mod error;
mod event;
mod integrator;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, TerminalStep};
pub use error::Error;
pub use event::Event;
pub use integrator::Integrator;
pub use solution::{Solution, Status};

use lode_core::{ContinuousProblem, Observer, OneStepScheme};

/// Integrates a problem over `steps` uniform intervals with the given scheme.
///
/// This is a convenience wrapper that builds an [`Integrator`] and runs it.
///
/// # Errors
///
/// Returns an error if the problem is ill-posed, `steps` is zero, or any
/// step produces a non-finite number.
pub fn solve<P, S, Obs>(
    problem: &P,
    scheme: S,
    steps: usize,
    config: Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    P: ContinuousProblem + ?Sized,
    S: OneStepScheme<P>,
    Obs: Observer<Event, Action>,
{
    Integrator::with_config(steps, problem, scheme, config)?.run(observer)
}

/// Integrates a problem with the default config and no observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<P, S>(problem: &P, scheme: S, steps: usize) -> Result<Solution, Error>
where
    P: ContinuousProblem + ?Sized,
    S: OneStepScheme<P>,
{
    solve(problem, scheme, steps, Config::default(), ())
}
