/// Event emitted by the integrator after each applied step.
///
/// `previous` is the value at level `step` and `current` the value at level
/// `step + 1`. The integrator commits `current` as the next `previous` before
/// emitting, so consecutive events chain exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step index passed to the scheme.
    pub step: usize,

    /// Mesh time at level `step`, where the scheme was evaluated.
    pub time: f64,

    /// Value before the step.
    pub previous: f64,

    /// Value after the step.
    pub current: f64,
}
