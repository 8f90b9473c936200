use lode_core::Mesh;

use super::Event;

/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Applied every step in the configured range.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a one-step integration.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the integrator terminated.
    pub status: Status,

    /// The last committed value.
    ///
    /// For a complete run with the default config this approximates the
    /// solution at the expiry.
    pub value: f64,

    /// Number of scheme steps applied.
    pub steps: usize,

    /// The mesh the run was computed on.
    pub mesh: Mesh,

    /// Every emitted event, in order.
    ///
    /// Empty unless history recording was enabled in the [`Config`](super::Config).
    pub history: Vec<Event>,
}
