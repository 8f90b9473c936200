use crate::{Coefficients, ContinuousProblem, EvaluationError, Mesh};

/// An immutable view of everything a scheme may read during a step.
///
/// Schemes never see the integrator's state directly. They get this view
/// plus the previous value and return the next value.
#[derive(Debug)]
pub struct StepView<'a, P: ?Sized> {
    problem: &'a P,
    mesh: &'a Mesh,
}

// Manual impls avoid the `P: Clone` bound a derive would add.
impl<P: ?Sized> Clone for StepView<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for StepView<'_, P> {}

impl<'a, P: ContinuousProblem + ?Sized> StepView<'a, P> {
    #[must_use]
    pub fn new(problem: &'a P, mesh: &'a Mesh) -> Self {
        Self { problem, mesh }
    }

    #[must_use]
    pub fn problem(&self) -> &'a P {
        self.problem
    }

    #[must_use]
    pub fn mesh(&self) -> &'a Mesh {
        self.mesh
    }

    /// Returns the uniform step size.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.mesh.delta()
    }

    /// Returns the time at level `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is past the end of the mesh.
    #[must_use]
    pub fn time(&self, n: usize) -> f64 {
        self.mesh[n]
    }

    /// Evaluates `a` and `f` at mesh level `n`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] if either term is not finite.
    pub fn coefficients(&self, n: usize) -> Result<Coefficients, EvaluationError> {
        Coefficients::evaluate(self.problem, self.time(n))
    }
}

/// A one-step finite-difference scheme.
///
/// Given a read view of the problem and mesh, the level `n`, and the value
/// at level `n`, a scheme returns the value at level `n + 1`. Implementations
/// must be pure: the same inputs always produce the same output, and a scheme
/// holds no per-run state.
///
/// The driver guarantees `n <= N`. Level `N` is only ever passed when the
/// driver is configured to apply the terminal step, in which case the scheme
/// evaluates at `mesh[N]` and steps past the expiry exactly as it would from
/// any other level.
pub trait OneStepScheme<P: ContinuousProblem + ?Sized> {
    /// Advances `previous` from level `n` to level `n + 1`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] if the problem produces a non-finite
    /// coefficient or forcing term.
    fn step(
        &self,
        view: &StepView<'_, P>,
        n: usize,
        previous: f64,
    ) -> Result<f64, EvaluationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::LinearIvp;

    /// Advances with the exact solution of `du/dt = f` for constant `f`.
    struct ConstantRate;

    impl<P: ContinuousProblem> OneStepScheme<P> for ConstantRate {
        fn step(
            &self,
            view: &StepView<'_, P>,
            n: usize,
            previous: f64,
        ) -> Result<f64, EvaluationError> {
            let Coefficients { f, .. } = view.coefficients(n)?;
            Ok(previous + view.delta() * f)
        }
    }

    #[test]
    fn view_exposes_mesh_and_problem() {
        let ivp = LinearIvp::new(|_| 1.0, |t| 2.0 + t, 2.0, 2.0);
        let mesh = Mesh::new(4, ivp.expiry()).expect("valid mesh");
        let view = StepView::new(&ivp, &mesh);

        assert_eq!(view.delta(), 0.5);
        assert_eq!(view.time(2), 1.0);
        assert_eq!(view.problem().initial_condition(), 2.0);
        assert_eq!(view.coefficients(2), Ok(Coefficients { a: 1.0, f: 3.0 }));
    }

    #[test]
    fn scheme_is_a_pure_function_of_its_inputs() {
        let ivp = LinearIvp::new(|_| 0.0, |_| 3.0, 1.0, 1.0);
        let mesh = Mesh::new(10, ivp.expiry()).expect("valid mesh");
        let view = StepView::new(&ivp, &mesh);

        let first = ConstantRate.step(&view, 3, 1.0).expect("finite");
        let second = ConstantRate.step(&view, 3, 1.0).expect("finite");

        assert_eq!(first, second);
        assert_relative_eq!(first, 1.3);
    }

    #[test]
    fn scheme_propagates_evaluation_errors() {
        let ivp = LinearIvp::new(|_| 0.0, |_| f64::INFINITY, 1.0, 1.0);
        let mesh = Mesh::new(2, ivp.expiry()).expect("valid mesh");
        let view = StepView::new(&ivp, &mesh);

        assert!(ConstantRate.step(&view, 0, 1.0).is_err());
    }
}
