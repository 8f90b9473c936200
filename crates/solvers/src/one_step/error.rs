use lode_core::{EvaluationError, MeshError, ProblemError};

/// Errors that can occur during one-step integration.
///
/// Every error aborts the run. Integration is deterministic, so the caller
/// must change the inputs before trying again.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The problem's expiry or initial condition is unusable.
    #[error("invalid problem configuration: {0}")]
    InvalidProblemConfiguration(#[from] ProblemError),

    /// The mesh could not be built, normally because the step count is zero.
    #[error("invalid step count: {0}")]
    InvalidStepCount(#[from] MeshError),

    /// A step produced or consumed a non-finite number.
    #[error("numeric evaluation failed at step {step}: {source}")]
    NumericEvaluation {
        step: usize,
        #[source]
        source: EvaluationError,
    },
}
