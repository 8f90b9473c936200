//! Core traits and types for one-step integration of linear initial-value
//! problems.
//!
//! The crate separates the continuous problem from its discretization:
//!
//! - [`ContinuousProblem`] — coefficient `a(t)`, forcing `f(t)`, initial
//!   condition and expiry of `du/dt + a(t) u = f(t)`
//! - [`Mesh`] — the uniform time points over `[0, expiry]`
//! - [`OneStepScheme`] — advances a value by one mesh level through a
//!   read-only [`StepView`]
//! - [`Observer`] — receives solver events and optionally returns control actions
//!
//! Driving the scheme across the mesh is left to solver crates.

mod mesh;
mod observer;
mod problem;
mod scheme;

pub use mesh::{Mesh, MeshError};
pub use observer::Observer;
pub use problem::{
    Coefficients, ContinuousProblem, EvaluationError, LinearIvp, ProblemError, Term, validate,
};
pub use scheme::{OneStepScheme, StepView};
