//! Concrete one-step schemes.
//!
//! Each scheme implements [`OneStepScheme`] for every [`ContinuousProblem`],
//! so they are interchangeable in the [`one_step`](crate::one_step) driver.
//!
//! [`OneStepScheme`]: lode_core::OneStepScheme
//! [`ContinuousProblem`]: lode_core::ContinuousProblem

mod explicit_euler;

pub use explicit_euler::ExplicitEuler;
