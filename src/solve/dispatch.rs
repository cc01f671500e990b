//! Entry point dispatching to the selected fixed-step method

use crate::{
    Float,
    core::{ode::ODE, solution::Solution},
    error::Error,
    methods::{Method, try_euler, try_rk2, try_rk4},
};

use super::options::Options;

/// Solve x' = f(x, t) on `n_steps` evenly spaced samples of `[a, b]`.
///
/// The method and initial value come from `options`.
///
/// # Example
///
/// ```
/// use fixed_step::prelude::*;
///
/// let options = Options::builder().method(Method::RK2).x0(1.0).build();
/// let sol = solve(&|x: f64, _t: f64| -x, 0.0, 1.0, 101, options).unwrap();
/// assert!((sol.last().1 - (-1.0f64).exp()).abs() < 1e-4);
/// ```
pub fn solve<F>(
    f: &F,
    a: Float,
    b: Float,
    n_steps: usize,
    options: Options,
) -> Result<Solution, Error>
where
    F: ODE + ?Sized,
{
    try_solve(|x, t| Ok(f.ode(x, t)), a, b, n_steps, options)
}

/// [`solve`] with a fallible right-hand side.
pub fn try_solve<F, E>(
    f: F,
    a: Float,
    b: Float,
    n_steps: usize,
    options: Options,
) -> Result<Solution, E>
where
    F: FnMut(Float, Float) -> Result<Float, E>,
    E: From<Error>,
{
    let Options { method, x0 } = options;

    // Dispatch by method
    match method {
        Method::Euler => try_euler(f, a, b, n_steps, x0),
        Method::RK2 => try_rk2(f, a, b, n_steps, x0),
        Method::RK4 => try_rk4(f, a, b, n_steps, x0),
    }
}
