//! Reusable observers for one-step integration.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose events and actions implement them.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasValues`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogSteps`] — logs every step through the `log` facade
//! - [`DivergenceGuard`] — stops a run whose value leaves a bound
//!
//! [`Observer`]: lode_core::Observer
//! [`HasValues`]: traits::HasValues
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod divergence;
mod log_steps;

pub use divergence::{BoundError, DivergenceGuard};
pub use log_steps::LogSteps;
