//! Uniform time grid construction.

use crate::{Float, error::Error};

/// Linear interpolation between `a` and `b` at fraction `s`.
///
/// `s = 0` returns `a` and `s = 1` returns `b` exactly.
pub fn lerp(a: Float, b: Float, s: Float) -> Float {
    if s == 1.0 { b } else { a + (b - a) * s }
}

/// `n` evenly spaced samples from `a` to `b` inclusive.
///
/// The first sample is exactly `a` and the last exactly `b`. Interior samples are
/// `a + i * (b - a) / (n - 1)`. Returns an empty vector for `n == 0` and `[a]` for
/// `n == 1`.
pub fn linspace(a: Float, b: Float, n: usize) -> Vec<Float> {
    match n {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let last = (n - 1) as Float;
            let span = b - a;
            // b - a can overflow for finite bounds of opposite sign
            let step = if span.is_finite() { span / last } else { b / last - a / last };
            let mut t = Vec::with_capacity(n);
            t.push(a);
            t.extend((1..n - 1).map(|i| a + i as Float * step));
            t.push(b);
            t
        }
    }
}

/// Validated uniform grid shared by all steppers.
#[derive(Debug, Clone)]
pub(crate) struct Grid {
    pub t: Vec<Float>,
    pub h: Float,
}

impl Grid {
    /// Builds the grid for `[a, b]` with `n_steps` samples.
    ///
    /// At least two samples are required, since the step size is taken as the
    /// spacing between the first two.
    pub fn new(a: Float, b: Float, n_steps: usize) -> Result<Self, Error> {
        if !a.is_finite() {
            return Err(Error::NonFiniteInput { name: "a", value: a });
        }
        if !b.is_finite() {
            return Err(Error::NonFiniteInput { name: "b", value: b });
        }
        if !(b - a).is_finite() {
            return Err(Error::NonFiniteInput { name: "b - a", value: b - a });
        }
        if n_steps < 2 {
            return Err(Error::TooFewSteps(n_steps));
        }

        let t = linspace(a, b, n_steps);
        let h = t[1] - t[0];
        Ok(Self { t, h })
    }
}
