//! The illustrative problem `du/dt + u = 2 + t`.

use lode_core::LinearIvp;

/// Builds the reference problem with the given initial condition and expiry.
///
/// The problem is first created over `[0, 1]` with `u(0) = 1` and then
/// reconfigured, the same way a caller would adjust a problem before
/// handing it to an integrator.
pub fn problem(
    initial_condition: f64,
    expiry: f64,
) -> LinearIvp<impl Fn(f64) -> f64, impl Fn(f64) -> f64> {
    let mut ivp = LinearIvp::new(|_| 1.0, |t| 2.0 + t, 1.0, 1.0);
    ivp.set_initial_condition(initial_condition);
    ivp.set_expiry(expiry);
    ivp
}

/// Exact solution `u(t) = t + 1 + (A - 1) e^{-t}`.
#[must_use]
pub fn exact(initial_condition: f64, t: f64) -> f64 {
    t + 1.0 + (initial_condition - 1.0) * (-t).exp()
}
