use super::ContinuousProblem;

/// A [`ContinuousProblem`] built from a pair of closures.
///
/// The initial condition and expiry are plain stored values that can be
/// replaced before a run starts. Once an integrator borrows the problem they
/// are frozen until the integrator is dropped.
///
/// ```
/// use lode_core::{ContinuousProblem, LinearIvp};
///
/// let mut ivp = LinearIvp::new(|_| 1.0, |t| 2.0 + t, 1.0, 1.0);
/// ivp.set_initial_condition(2.0);
/// ivp.set_expiry(2.0);
///
/// assert_eq!(ivp.initial_condition(), 2.0);
/// assert_eq!(ivp.f(0.5), 2.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LinearIvp<A, F> {
    a: A,
    f: F,
    initial_condition: f64,
    expiry: f64,
}

impl<A, F> LinearIvp<A, F>
where
    A: Fn(f64) -> f64,
    F: Fn(f64) -> f64,
{
    /// Creates a problem from its coefficient, forcing term, initial condition and expiry.
    ///
    /// No validation happens here; integrators validate the problem when
    /// they are constructed.
    pub fn new(a: A, f: F, initial_condition: f64, expiry: f64) -> Self {
        Self {
            a,
            f,
            initial_condition,
            expiry,
        }
    }

    pub fn set_initial_condition(&mut self, value: f64) {
        self.initial_condition = value;
    }

    pub fn set_expiry(&mut self, value: f64) {
        self.expiry = value;
    }

    /// Returns the problem with its initial condition replaced.
    #[must_use]
    pub fn with_initial_condition(mut self, value: f64) -> Self {
        self.set_initial_condition(value);
        self
    }

    /// Returns the problem with its expiry replaced.
    #[must_use]
    pub fn with_expiry(mut self, value: f64) -> Self {
        self.set_expiry(value);
        self
    }
}

impl<A, F> ContinuousProblem for LinearIvp<A, F>
where
    A: Fn(f64) -> f64,
    F: Fn(f64) -> f64,
{
    fn a(&self, t: f64) -> f64 {
        (self.a)(t)
    }

    fn f(&self, t: f64) -> f64 {
        (self.f)(t)
    }

    fn initial_condition(&self) -> f64 {
        self.initial_condition
    }

    fn expiry(&self) -> f64 {
        self.expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_replace_stored_values() {
        let mut ivp = LinearIvp::new(|_| 1.0, |t| 2.0 + t, 1.0, 1.0);
        ivp.set_initial_condition(2.0);
        ivp.set_expiry(3.0);

        assert_eq!(ivp.initial_condition(), 2.0);
        assert_eq!(ivp.expiry(), 3.0);
    }

    #[test]
    fn builders_match_setters() {
        let ivp = LinearIvp::new(|t| t, |_| 0.0, 0.0, 1.0)
            .with_initial_condition(-1.5)
            .with_expiry(4.0);

        assert_eq!(ivp.initial_condition(), -1.5);
        assert_eq!(ivp.expiry(), 4.0);
    }

    #[test]
    fn evaluates_closures_pointwise() {
        let ivp = LinearIvp::new(|t| 3.0 * t, |t| t * t, 0.0, 1.0);

        assert_eq!(ivp.a(2.0), 6.0);
        assert_eq!(ivp.f(3.0), 9.0);
    }
}
