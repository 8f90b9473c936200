use lode_core::{Coefficients, ContinuousProblem, EvaluationError, OneStepScheme, StepView};

/// Forward (explicit) Euler.
///
/// Discretizes `du/dt = f(t) - a(t) u` with a forward difference evaluated at
/// the start of the interval:
///
/// ```text
/// u_{n+1} = (1 - dt * a(t_n)) * u_n + dt * f(t_n)
/// ```
///
/// The scheme is first-order accurate and only conditionally stable: errors
/// stay bounded while `|1 - dt * a(t)| <= 1`. Stability is not enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExplicitEuler;

impl ExplicitEuler {
    /// Returns the factor applied to `u_n` for a coefficient `a` and step `dt`.
    ///
    /// The homogeneous part of the scheme is stable while its magnitude is at
    /// most one.
    #[must_use]
    pub fn amplification(dt: f64, a: f64) -> f64 {
        1.0 - dt * a
    }
}

impl<P: ContinuousProblem + ?Sized> OneStepScheme<P> for ExplicitEuler {
    fn step(
        &self,
        view: &StepView<'_, P>,
        n: usize,
        previous: f64,
    ) -> Result<f64, EvaluationError> {
        let Coefficients { a, f } = view.coefficients(n)?;
        let dt = view.delta();

        Ok(Self::amplification(dt, a) * previous + dt * f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use lode_core::{LinearIvp, Mesh, Term};

    #[test]
    fn single_step_matches_formula() {
        let ivp = LinearIvp::new(|_| 1.0, |t| 2.0 + t, 2.0, 2.0);
        let mesh = Mesh::new(100, ivp.expiry()).expect("valid mesh");
        let view = StepView::new(&ivp, &mesh);

        let next = ExplicitEuler.step(&view, 0, 2.0).expect("finite");

        // (1 - 0.02 * 1) * 2 + 0.02 * 2
        assert_relative_eq!(next, 2.0);
    }

    #[test]
    fn evaluates_at_start_of_interval() {
        let ivp = LinearIvp::new(|t| t, |t| 10.0 * t, 1.0, 1.0);
        let mesh = Mesh::new(4, ivp.expiry()).expect("valid mesh");
        let view = StepView::new(&ivp, &mesh);

        let next = ExplicitEuler.step(&view, 2, 3.0).expect("finite");

        // t_2 = 0.5: (1 - 0.25 * 0.5) * 3 + 0.25 * 5
        assert_relative_eq!(next, 0.875 * 3.0 + 1.25);
    }

    #[test]
    fn terminal_level_evaluates_at_expiry() {
        let ivp = LinearIvp::new(|_| 0.0, |t| t, 0.0, 2.0);
        let mesh = Mesh::new(2, ivp.expiry()).expect("valid mesh");
        let view = StepView::new(&ivp, &mesh);

        let next = ExplicitEuler.step(&view, 2, 1.0).expect("finite");

        assert_relative_eq!(next, 1.0 + 1.0 * 2.0);
    }

    #[test]
    fn amplification_marks_stability_boundary() {
        assert_relative_eq!(ExplicitEuler::amplification(0.1, 1.0), 0.9);
        assert_relative_eq!(ExplicitEuler::amplification(0.04, 50.0), -1.0);
        assert!(ExplicitEuler::amplification(0.1, 50.0).abs() > 1.0);
    }

    #[test]
    fn non_finite_coefficient_is_an_error() {
        let ivp = LinearIvp::new(|_| f64::NAN, |_| 1.0, 1.0, 1.0);
        let mesh = Mesh::new(4, ivp.expiry()).expect("valid mesh");
        let view = StepView::new(&ivp, &mesh);

        let err = ExplicitEuler.step(&view, 1, 1.0).unwrap_err();

        assert_eq!(err.term, Term::Coefficient);
        assert_eq!(err.t, 0.25);
    }
}
