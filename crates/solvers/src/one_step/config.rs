/// Whether the integrator applies a step at the final mesh level.
///
/// A mesh with `N` intervals needs exactly `N` steps (indices `0..N`) to
/// reach the expiry. A loop over `0..=N` applies one more update, evaluated
/// at `mesh[N]`. [`Apply`] reproduces that trace. The resulting value then
/// approximates the solution one step past the expiry.
///
/// [`Apply`]: TerminalStep::Apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TerminalStep {
    /// Run step indices `0..N`.
    #[default]
    Skip,

    /// Run step indices `0..=N`.
    Apply,
}

impl TerminalStep {
    /// Returns how many steps are applied on a mesh of `steps` intervals.
    #[must_use]
    pub fn step_count(self, steps: usize) -> usize {
        match self {
            TerminalStep::Skip => steps,
            TerminalStep::Apply => steps + 1,
        }
    }
}

/// Configuration for the one-step integrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    terminal_step: TerminalStep,
    record_history: bool,
}

impl Config {
    /// Returns the config with the given terminal step behavior.
    #[must_use]
    pub fn with_terminal_step(mut self, terminal_step: TerminalStep) -> Self {
        self.terminal_step = terminal_step;
        self
    }

    /// Returns the config with history recording turned on or off.
    #[must_use]
    pub fn with_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }

    #[must_use]
    pub fn terminal_step(&self) -> TerminalStep {
        self.terminal_step
    }

    #[must_use]
    pub fn record_history(&self) -> bool {
        self.record_history
    }
}
