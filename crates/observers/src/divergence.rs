use lode_core::Observer;
use thiserror::Error;

use crate::traits::{CanStopEarly, HasValues};

/// Stops a run once the value leaves `[-bound, bound]` or stops being a number.
///
/// Explicit schemes are only conditionally stable. With too large a step the
/// value grows geometrically, and this guard ends the run long before it
/// overflows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergenceGuard {
    bound: f64,
}

/// The bound given to a [`DivergenceGuard`] is unusable.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("divergence bound must be finite and positive, got {0}")]
pub struct BoundError(pub f64);

impl DivergenceGuard {
    /// Creates a guard for the given magnitude bound.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundError`] if `bound` is not finite and positive.
    pub fn new(bound: f64) -> Result<Self, BoundError> {
        if !bound.is_finite() || bound <= 0.0 {
            return Err(BoundError(bound));
        }
        Ok(Self { bound })
    }

    #[must_use]
    pub fn bound(&self) -> f64 {
        self.bound
    }
}

impl<E: HasValues, A: CanStopEarly> Observer<E, A> for DivergenceGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        let current = event.current();

        // NaN fails the comparison too.
        if current.abs() <= self.bound {
            return None;
        }

        log::warn!(
            "value {current} left [-{bound}, {bound}] at step {step}",
            bound = self.bound,
            step = event.step()
        );
        Some(A::stop_early())
    }
}
