#![allow(dead_code)]

use std::cell::Cell;

use fixed_step::prelude::*;

/// Exponential growth x' = x, exact solution x0 * exp(t - a).
pub struct Growth;

impl ODE for Growth {
    fn ode(&self, x: Float, _t: Float) -> Float {
        x
    }
}

/// Right-hand side that records how many times it was evaluated.
pub struct Counting<F> {
    pub f: F,
    pub calls: Cell<usize>,
}

impl<F: Fn(Float, Float) -> Float> Counting<F> {
    pub fn new(f: F) -> Self {
        Self { f, calls: Cell::new(0) }
    }
}

impl<F: Fn(Float, Float) -> Float> ODE for Counting<F> {
    fn ode(&self, x: Float, t: Float) -> Float {
        self.calls.set(self.calls.get() + 1);
        (self.f)(x, t)
    }
}

/// Run `method` through the high-level entry point.
pub fn run<F: ODE>(method: Method, f: &F, a: Float, b: Float, n_steps: usize, x0: Float) -> Solution {
    let options = Options::builder().method(method).x0(x0).build();
    solve(f, a, b, n_steps, options).unwrap()
}

/// Absolute error at `t = b` for a grid with `intervals` steps.
pub fn end_error<F: ODE>(
    method: Method,
    f: &F,
    a: Float,
    b: Float,
    intervals: usize,
    x0: Float,
    exact: Float,
) -> Float {
    let sol = run(method, f, a, b, intervals + 1, x0);
    (sol.last().1 - exact).abs()
}
