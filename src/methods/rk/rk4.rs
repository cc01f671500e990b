//! Classic explicit Runge-Kutta 4 (RK4) fixed-step integrator.

use crate::{
    Float,
    core::{ode::ODE, solution::Solution},
    error::Error,
    methods::{Method, integrate},
};

/// Classical explicit Runge-Kutta 4 (RK4) fixed-step integrator.
///
/// ```text
/// k1 = h * f(x, t)
/// k2 = h * f(x + k1/2, t + h/2)
/// k3 = h * f(x + k2/2, t + h/2)
/// k4 = h * f(x + k3, t + h)
/// x_next = x + (k1 + 2*k2 + 2*k3 + k4) / 6
/// ```
///
/// Fourth order accurate, four evaluations of `f` per step.
///
/// # Errors
///
/// Same input validation as [`crate::euler`].
pub fn rk4<F>(
    f: &F,
    a: Float,
    b: Float,
    n_steps: usize,
    x0: Float,
) -> Result<Solution, Error>
where
    F: ODE + ?Sized,
{
    try_rk4(|x, t| Ok(f.ode(x, t)), a, b, n_steps, x0)
}

/// RK4 with a fallible right-hand side.
///
/// The first `Err` returned by `f` stops the integration and is returned as is.
pub fn try_rk4<F, E>(
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
    integrate(&mut f, a, b, n_steps, x0, Method::RK4, step)
}

fn step<F, E>(f: &mut F, x: Float, t: Float, h: Float) -> Result<Float, E>
where
    F: FnMut(Float, Float) -> Result<Float, E>,
{
    // Stage computations
    let k1 = h * f(x, t)?;
    let k2 = h * f(x + A21 * k1, t + C2 * h)?;
    let k3 = h * f(x + A32 * k2, t + C3 * h)?;
    let k4 = h * f(x + A43 * k3, t + C4 * h)?;

    Ok(x + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0)
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
