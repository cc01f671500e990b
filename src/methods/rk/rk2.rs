//! Midpoint Runge-Kutta (RK2) fixed-step integrator.

use crate::{
    Float,
    core::{ode::ODE, solution::Solution},
    error::Error,
    methods::{Method, integrate},
};

/// Midpoint Runge-Kutta (RK2) fixed-step integrator.
///
/// Each step takes a half Euler step to estimate the state at the midpoint and
/// advances the full step with the slope found there:
///
/// ```text
/// k1 = h * f(x, t)
/// k2 = h * f(x + k1/2, t + h/2)
/// x_next = x + k2
/// ```
///
/// Second order accurate, two evaluations of `f` per step. `k1` only positions
/// the midpoint and does not enter the update (this is not Heun's method).
///
/// # Errors
///
/// Same input validation as [`crate::euler`].
pub fn rk2<F>(
    f: &F,
    a: Float,
    b: Float,
    n_steps: usize,
    x0: Float,
) -> Result<Solution, Error>
where
    F: ODE + ?Sized,
{
    try_rk2(|x, t| Ok(f.ode(x, t)), a, b, n_steps, x0)
}

/// RK2 with a fallible right-hand side.
///
/// The first `Err` returned by `f` stops the integration and is returned as is.
pub fn try_rk2<F, E>(
    mut f: F,
    a: Float,
    b: Float,
    n_steps: usize,
    x0: Float,
) -> Result<Solution, E>
where
    F: FnMut(Float, Float) -> Result<Float, E>,
    E: From<Error>,
{
    integrate(&mut f, a, b, n_steps, x0, Method::RK2, step)
}

fn step<F, E>(f: &mut F, x: Float, t: Float, h: Float) -> Result<Float, E>
where
    F: FnMut(Float, Float) -> Result<Float, E>,
{
    let k1 = h * f(x, t)?;
    let k2 = h * f(x + k1 / 2.0, t + h / 2.0)?;
    Ok(x + k2)
}
