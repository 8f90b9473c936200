/// Receives events from a solver and optionally returns a control action.
///
/// Observers are how callers watch a run without the solver knowing anything
/// about printing, logging or plotting. The solver decides which events it
/// emits and which actions it honors.
///
/// Implemented for `()` (ignore everything) and for any
/// `FnMut(&E) -> Option<A>` closure.
pub trait Observer<E, A> {
    /// Handles one event, returning an action for the solver if any.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    fn drive<O: Observer<usize, Action>>(mut observer: O, events: usize) -> Option<usize> {
        (0..events).find(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let observer = |event: &usize| (*event == 3).then_some(Action::Stop);

        assert_eq!(drive(observer, 10), Some(3));
    }

    #[test]
    fn closure_observer_can_capture_state() {
        let mut seen = Vec::new();
        drive(
            |event: &usize| {
                seen.push(*event);
                None::<Action>
            },
            4,
        );

        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}
