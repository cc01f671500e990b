//! Forward Euler fixed-step integrator.

use crate::{Float, core::ode::ODE, core::solution::Solution, error::Error};

use super::{Method, integrate};

/// Forward Euler fixed-step integrator.
///
/// Samples `n_steps` points evenly on `[a, b]`, starts from `x0` and advances
/// with `x[i+1] = x[i] + h * f(x[i], t[i])`. First order accurate, one evaluation
/// of `f` per step.
///
/// # Errors
///
/// [`Error::TooFewSteps`] if `n_steps < 2`, [`Error::NonFiniteInput`] if `a`, `b`,
/// `b - a` or `x0` is not finite. `f` is never called in either case.
pub fn euler<F>(
    f: &F,
    a: Float,
    b: Float,
    n_steps: usize,
    x0: Float,
) -> Result<Solution, Error>
where
    F: ODE + ?Sized,
{
    try_euler(|x, t| Ok(f.ode(x, t)), a, b, n_steps, x0)
}

/// Forward Euler with a fallible right-hand side.
///
/// The first `Err` returned by `f` stops the integration and is returned as is.
pub fn try_euler<F, E>(
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
    integrate(&mut f, a, b, n_steps, x0, Method::Euler, step)
}

fn step<F, E>(f: &mut F, x: Float, t: Float, h: Float) -> Result<Float, E>
where
    F: FnMut(Float, Float) -> Result<Float, E>,
{
    Ok(x + h * f(x, t)?)
}
