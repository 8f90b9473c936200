/// Control actions supported by the one-step integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the integrator early and return the solution so far.
    StopEarly,
}
