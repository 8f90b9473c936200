use lode_core::{
    ContinuousProblem, EvaluationError, Mesh, Observer, OneStepScheme, StepView, Term, validate,
};

use super::{Action, Config, Error, Event, Solution, Status, state::State};

/// Drives a [`OneStepScheme`] across the mesh of a [`ContinuousProblem`].
///
/// An integrator is created in a configured state: the problem is validated,
/// the mesh is built and both state levels hold the initial condition.
/// [`run`](Self::run) consumes it, so a completed integrator can never be run
/// again. Rerunning with different parameters means building a new one.
///
/// The problem is borrowed for the integrator's whole life, which keeps its
/// initial condition and expiry fixed from construction to completion.
#[derive(Debug)]
pub struct Integrator<'p, P: ?Sized, S> {
    problem: &'p P,
    scheme: S,
    mesh: Mesh,
    state: State,
    config: Config,
}

impl<'p, P, S> Integrator<'p, P, S>
where
    P: ContinuousProblem + ?Sized,
    S: OneStepScheme<P>,
{
    /// Creates an integrator with the default [`Config`].
    ///
    /// # Errors
    ///
    /// See [`with_config`](Self::with_config).
    pub fn new(steps: usize, problem: &'p P, scheme: S) -> Result<Self, Error> {
        Self::with_config(steps, problem, scheme, Config::default())
    }

    /// Creates an integrator over `steps` uniform intervals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProblemConfiguration`] if the problem fails
    /// validation, or [`Error::InvalidStepCount`] if `steps` is zero.
    pub fn with_config(
        steps: usize,
        problem: &'p P,
        scheme: S,
        config: Config,
    ) -> Result<Self, Error> {
        validate(problem)?;
        let mesh = Mesh::new(steps, problem.expiry())?;

        Ok(Self {
            problem,
            scheme,
            mesh,
            state: State::new(problem.initial_condition()),
            config,
        })
    }

    #[must_use]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the value the run will start from.
    #[must_use]
    pub fn initial_value(&self) -> f64 {
        self.state.current
    }

    /// Runs the integration to completion.
    ///
    /// # Algorithm
    ///
    /// For each step index `n` in the configured range:
    ///
    /// 1. Ask the scheme for the value at level `n + 1`.
    /// 2. Reject the value if it is not finite.
    /// 3. Commit it as the starting value of the next step.
    /// 4. Record the [`Event`] if history is enabled, then emit it.
    /// 5. If the observer returns [`Action::StopEarly`], terminate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericEvaluation`] as soon as a step produces or
    /// consumes a non-finite number. No partial solution is returned.
    pub fn run<Obs>(self, mut observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<Event, Action>,
    {
        let Self {
            problem,
            scheme,
            mesh,
            mut state,
            config,
        } = self;

        let total = config.terminal_step().step_count(mesh.steps());
        let mut history = if config.record_history() {
            Vec::with_capacity(total)
        } else {
            Vec::new()
        };

        log::debug!(
            "integrating {} steps of {} from {}",
            total,
            mesh.delta(),
            state.current
        );

        let view = StepView::new(problem, &mesh);
        let mut status = Status::Complete;
        let mut applied = 0;

        for n in 0..total {
            let time = view.time(n);
            let next = scheme
                .step(&view, n, state.previous)
                .and_then(|value| EvaluationError::check(Term::Value, time, value))
                .map_err(|source| Error::NumericEvaluation { step: n, source })?;

            state.advance(next);
            let event = Event {
                step: n,
                time,
                previous: state.previous,
                current: state.current,
            };
            state.commit();
            applied += 1;

            log::trace!("step {n}: old = {}, new = {}", event.previous, event.current);

            if config.record_history() {
                history.push(event);
            }

            if let Some(Action::StopEarly) = observer.observe(&event) {
                log::debug!("observer stopped integration after step {n}");
                status = Status::StoppedByObserver;
                break;
            }
        }

        log::debug!("integration finished with value {}", state.current);

        Ok(Solution {
            status,
            value: state.current,
            steps: applied,
            mesh,
            history,
        })
    }

    /// Runs the integration to completion without observation.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn run_unobserved(self) -> Result<Solution, Error> {
        self.run(())
    }
}
