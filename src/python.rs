use numpy::PyArray1;
use pyo3::prelude::*;

use crate::{Float, error::Error, methods::Method, solve::Options, solve::try_solve};

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

type Arrays<'py> = (Bound<'py, PyArray1<Float>>, Bound<'py, PyArray1<Float>>);

fn run<'py>(
    py: Python<'py>,
    method: Method,
    a: Float,
    b: Float,
    n_steps: usize,
    func: &Bound<'py, PyAny>,
    x0: Float,
) -> PyResult<Arrays<'py>> {
    let options = Options::builder().method(method).x0(x0).build();
    let sol = try_solve(
        |x, t| -> PyResult<Float> { Ok(func.call1((x, t))?.extract::<Float>()?) },
        a,
        b,
        n_steps,
        options,
    )?;
    let (x, t) = sol.into_parts();
    Ok((PyArray1::from_vec(py, x), PyArray1::from_vec(py, t)))
}

#[pyfunction]
#[pyo3(signature = (a, b, n_steps, func, x0=0.0))]
/// Solve x' = func(x, t) with the forward Euler method.
///
/// Parameters
/// ----------
/// a : float
///     Initial time.
/// b : float
///     Final time.
/// n_steps : int
///     Number of time samples, at least 2.
/// func : callable
///     Right-hand side, called as ``func(x, t)``.
/// x0 : float, optional
///     Initial value. Default is 0.0.
///
/// Returns
/// -------
/// (x, t) : tuple of ndarray
///     State values and the matching time samples.
fn euler<'py>(
    py: Python<'py>,
    a: Float,
    b: Float,
    n_steps: usize,
    func: Bound<'py, PyAny>,
    x0: Float,
) -> PyResult<Arrays<'py>> {
    run(py, Method::Euler, a, b, n_steps, &func, x0)
}

#[pyfunction]
#[pyo3(signature = (a, b, n_steps, func, x0=0.0))]
/// Solve x' = func(x, t) with the midpoint Runge-Kutta method (RK2).
///
/// Same parameters and return value as ``euler``.
fn rk2<'py>(
    py: Python<'py>,
    a: Float,
    b: Float,
    n_steps: usize,
    func: Bound<'py, PyAny>,
    x0: Float,
) -> PyResult<Arrays<'py>> {
    run(py, Method::RK2, a, b, n_steps, &func, x0)
}

#[pyfunction]
#[pyo3(signature = (a, b, n_steps, func, x0=0.0))]
/// Solve x' = func(x, t) with the classical Runge-Kutta method (RK4).
///
/// Same parameters and return value as ``euler``.
fn rk4<'py>(
    py: Python<'py>,
    a: Float,
    b: Float,
    n_steps: usize,
    func: Bound<'py, PyAny>,
    x0: Float,
) -> PyResult<Arrays<'py>> {
    run(py, Method::RK4, a, b, n_steps, &func, x0)
}

#[pymodule]
fn fixed_step(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(euler, m)?)?;
    m.add_function(wrap_pyfunction!(rk2, m)?)?;
    m.add_function(wrap_pyfunction!(rk4, m)?)?;

    let doc = "Fixed-step integrators for scalar first-order ODEs x' = f(x, t).\n\n\
               Each function takes (a, b, n_steps, func, x0=0.0) and returns the\n\
               state and time samples as numpy arrays:\n\
               - euler: forward Euler, first order\n\
               - rk2: midpoint Runge-Kutta, second order\n\
               - rk4: classical Runge-Kutta, fourth order";
    m.setattr("__doc__", doc)?;

    Ok(())
}
