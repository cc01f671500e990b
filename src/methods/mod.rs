//! Fixed-step explicit integrators (Euler, RK2, RK4)

mod euler;
mod method;

pub mod rk;

pub use euler::{euler, try_euler};
pub use method::Method;
pub use rk::{rk2, rk4, try_rk2, try_rk4};

use crate::{Float, core::grid::Grid, core::solution::Solution, error::Error};

/// Shared loop skeleton for every fixed-step method.
///
/// `step` advances one sample: given the right-hand side, the current state,
/// time and step size it returns the next state. Entry `i + 1` is computed from
/// entry `i` alone and never revisited.
pub(crate) fn integrate<F, E, S>(
    f: &mut F,
    a: Float,
    b: Float,
    n_steps: usize,
    x0: Float,
    method: Method,
    step: S,
) -> Result<Solution, E>
where
    F: FnMut(Float, Float) -> Result<Float, E>,
    E: From<Error>,
    S: Fn(&mut F, Float, Float, Float) -> Result<Float, E>,
{
    // --- Input Validation ---
    let Grid { t, h } = Grid::new(a, b, n_steps)?;
    if !x0.is_finite() {
        return Err(Error::NonFiniteInput { name: "x0", value: x0 }.into());
    }

    // --- Declarations ---
    let mut x = Vec::with_capacity(n_steps);
    x.push(x0);
    let mut xi = x0;

    // --- Main integration loop ---
    for &ti in &t[..n_steps - 1] {
        xi = step(f, xi, ti, h)?;
        x.push(xi);
    }

    Ok(Solution {
        x,
        t,
        h,
        nfev: (n_steps - 1) * method.stages(),
        nstep: n_steps - 1,
        method,
    })
}
