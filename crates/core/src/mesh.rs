use std::ops::Index;

use thiserror::Error;

/// A uniform time mesh over `[0, expiry]`.
///
/// The mesh holds `steps + 1` strictly increasing points with
/// `mesh[0] == 0.0` and `mesh[steps] == expiry` exactly. Interior points are
/// accumulated one step at a time (`mesh[n] = mesh[n - 1] + delta`) rather
/// than computed as `n * delta`, so they carry the same rounding drift as a
/// step-by-step walk.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    points: Vec<f64>,
    delta: f64,
}

/// Errors that can occur when building a [`Mesh`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MeshError {
    #[error("step count must be at least 1, got {0}")]
    InvalidStepCount(usize),

    #[error("expiry must be finite and positive, got {0}")]
    InvalidExpiry(f64),
}

impl Mesh {
    /// Builds a mesh of `steps` uniform intervals over `[0, expiry]`.
    ///
    /// Each point is logged at `trace` level as it is computed.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidStepCount`] if `steps` is zero, or
    /// [`MeshError::InvalidExpiry`] if `expiry` is not finite and positive.
    pub fn new(steps: usize, expiry: f64) -> Result<Self, MeshError> {
        if steps < 1 {
            return Err(MeshError::InvalidStepCount(steps));
        }
        if !expiry.is_finite() || expiry <= 0.0 {
            return Err(MeshError::InvalidExpiry(expiry));
        }

        let delta = expiry / steps as f64;

        let mut points = vec![0.0; steps + 1];
        points[steps] = expiry;
        for n in 1..steps {
            points[n] = points[n - 1] + delta;
            log::trace!("mesh[{n}] = {}", points[n]);
        }

        Ok(Self { points, delta })
    }

    /// Returns the number of intervals `N`.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns the uniform step size `expiry / N`.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    #[must_use]
    pub fn expiry(&self) -> f64 {
        self.points[self.steps()]
    }

    /// Returns the time at level `n`, or `None` if `n > N`.
    #[must_use]
    pub fn time(&self, n: usize) -> Option<f64> {
        self.points.get(n).copied()
    }

    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }
}

impl Index<usize> for Mesh {
    type Output = f64;

    fn index(&self, n: usize) -> &f64 {
        &self.points[n]
    }
}
