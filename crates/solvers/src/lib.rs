//! Solvers for linear initial-value problems.
//!
//! # Modules
//!
//! - [`one_step`] — the integrator that drives any [`OneStepScheme`] across a
//!   uniform mesh
//! - [`schemes`] — concrete one-step schemes
//!
//! [`OneStepScheme`]: lode_core::OneStepScheme

pub mod one_step;
pub mod schemes;
