//! A struct representing the outputted result of a fixed-step integrator.

use crate::{Float, core::grid::lerp, methods::Method};

/// The output of a fixed-step integrator.
///
/// `x[i]` is the computed state at time `t[i]`; both sequences have one entry per
/// grid sample. Solutions returned by the integrators always hold at least two
/// samples. A hand-built value must keep `x` and `t` the same non-zero length, or
/// [`last`](Self::last), [`sol_span`](Self::sol_span) and [`sol`](Self::sol) panic.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// State sequence, starting at the initial value.
    pub x: Vec<Float>,
    /// Time samples, evenly spaced from `a` to `b`.
    pub t: Vec<Float>,
    /// The step size used
    pub h: Float,
    /// The number of function evaluations
    pub nfev: usize,
    /// The number of steps taken
    pub nstep: usize,
    /// The method that produced this solution
    pub method: Method,
}

impl Solution {
    /// Consume the solution and return `(x, t)`.
    pub fn into_parts(self) -> (Vec<Float>, Vec<Float>) {
        (self.x, self.t)
    }

    /// Final `(t, x)` sample.
    ///
    /// # Panics
    ///
    /// If the solution holds no samples.
    pub fn last(&self) -> (Float, Float) {
        let n = self.t.len() - 1;
        (self.t[n], self.x[n])
    }

    /// Return the time span covered by the samples.
    ///
    /// # Panics
    ///
    /// If the solution holds no samples.
    pub fn sol_span(&self) -> (Float, Float) {
        (self.t[0], self.t[self.t.len() - 1])
    }

    /// Evaluate the piecewise-linear interpolant of the samples at `t`.
    /// Returns None if `t` lies outside the covered span.
    pub fn sol(&self, t: Float) -> Option<Float> {
        let (t0, t1) = self.sol_span();
        if t0 == t1 {
            return (t == t0).then_some(self.x[0]);
        }
        let s = (t - t0) / (t1 - t0);
        if !(0.0..=1.0).contains(&s) {
            return None;
        }

        let last = self.t.len() - 1;
        let i = ((s * last as Float).floor() as usize).min(last - 1);
        if t == self.t[i] {
            return Some(self.x[i]);
        }
        let frac = (t - self.t[i]) / (self.t[i + 1] - self.t[i]);
        Some(lerp(self.x[i], self.x[i + 1], frac))
    }

    /// Evaluate the interpolant at many time points.
    /// Points outside the span yield None entries.
    pub fn sol_many(&self, ts: &[Float]) -> Vec<Option<Float>> {
        ts.iter().map(|&t| self.sol(t)).collect()
    }

    /// Iterate over stored sample pairs (t_i, x_i).
    pub fn iter(&self) -> SolutionIter<'_> {
        SolutionIter {
            t_iter: self.t.iter(),
            x_iter: self.x.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = (Float, Float);
    type IntoIter = SolutionIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over (t, x) pairs of stored samples in a [`Solution`].
pub struct SolutionIter<'a> {
    t_iter: std::slice::Iter<'a, Float>,
    x_iter: std::slice::Iter<'a, Float>,
}

impl Iterator for SolutionIter<'_> {
    type Item = (Float, Float);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.t_iter.next(), self.x_iter.next()) {
            (Some(&t), Some(&x)) => Some((t, x)),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.t_iter.size_hint()
    }
}

impl ExactSizeIterator for SolutionIter<'_> {}
