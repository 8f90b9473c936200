use log::Level;
use lode_core::Observer;

use crate::traits::HasValues;

/// Logs every step as `step n (t = ..): old = .., new = ..`.
///
/// Never returns an action. Output goes through the `log` facade, so nothing
/// is printed unless the application installs a logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSteps {
    level: Level,
}

impl Default for LogSteps {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl LogSteps {
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl<E: HasValues, A> Observer<E, A> for LogSteps {
    fn observe(&mut self, event: &E) -> Option<A> {
        log::log!(
            self.level,
            "step {} (t = {}): old = {}, new = {}",
            event.step(),
            event.time(),
            event.previous(),
            event.current()
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lode_core::LinearIvp;
    use lode_solvers::{
        one_step::{self, Config, Status},
        schemes::ExplicitEuler,
    };

    #[test]
    fn defaults_to_info() {
        assert_eq!(LogSteps::default().level(), Level::Info);
    }

    #[test]
    fn never_interrupts_a_run() {
        let ivp = LinearIvp::new(|_| 1.0, |t| 2.0 + t, 2.0, 2.0);

        let solution = one_step::solve(
            &ivp,
            ExplicitEuler,
            100,
            Config::default(),
            LogSteps::new(Level::Trace),
        )
        .expect("should solve");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 100);
    }
}
