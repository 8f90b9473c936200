/// Values at the two time levels touched by a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct State {
    pub(super) previous: f64,
    pub(super) current: f64,
}

impl State {
    pub(super) fn new(initial: f64) -> Self {
        Self {
            previous: initial,
            current: initial,
        }
    }

    /// Records the value at the next level without committing it.
    pub(super) fn advance(&mut self, next: f64) {
        self.current = next;
    }

    /// Makes the current value the starting point of the next step.
    pub(super) fn commit(&mut self) {
        self.previous = self.current;
    }
}
