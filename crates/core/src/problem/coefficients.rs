use std::fmt;

use thiserror::Error;

use super::ContinuousProblem;

/// Identifies which quantity failed a finiteness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// The coefficient `a(t)`.
    Coefficient,
    /// The forcing term `f(t)`.
    Forcing,
    /// The value produced by a scheme step.
    Value,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Coefficient => f.write_str("coefficient a(t)"),
            Term::Forcing => f.write_str("forcing f(t)"),
            Term::Value => f.write_str("stepped value"),
        }
    }
}

/// A non-finite number was produced while evaluating a step.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("{term} is not finite at t = {t}: {value}")]
pub struct EvaluationError {
    pub term: Term,
    pub t: f64,
    pub value: f64,
}

impl EvaluationError {
    /// Returns `Ok(value)` when it is finite, otherwise an error naming the term.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] if `value` is NaN or infinite.
    pub fn check(term: Term, t: f64, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self { term, t, value })
        }
    }
}

/// The coefficient and forcing term evaluated at a single time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub f: f64,
}

impl Coefficients {
    /// Evaluates `a(t)` and `f(t)`, rejecting non-finite results.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] if either term is NaN or infinite.
    pub fn evaluate<P: ContinuousProblem + ?Sized>(
        problem: &P,
        t: f64,
    ) -> Result<Self, EvaluationError> {
        let a = EvaluationError::check(Term::Coefficient, t, problem.a(t))?;
        let f = EvaluationError::check(Term::Forcing, t, problem.f(t))?;
        Ok(Self { a, f })
    }
}
