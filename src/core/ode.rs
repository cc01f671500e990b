//! User-supplied right-hand side.

use crate::Float;

/// User-supplied scalar ODE.
///
/// Implement this trait for your problem to provide the right-hand side of
/// x' = f(x, t). The integrator calls `ode` with the current state `x` and time
/// `t`, including intermediate stage arguments that never end up in the output.
///
/// Any `Fn(Float, Float) -> Float` closure already implements `ODE`.
///
/// # Example
///
/// ```
/// use fixed_step::ODE;
///
/// struct Decay { rate: f64 }
///
/// impl ODE for Decay {
///     fn ode(&self, x: f64, _t: f64) -> f64 {
///         -self.rate * x
///     }
/// }
///
/// assert_eq!(Decay { rate: 2.0 }.ode(1.5, 0.0), -3.0);
/// ```
pub trait ODE {
    fn ode(&self, x: Float, t: Float) -> Float;
}

impl<F> ODE for F
where
    F: Fn(Float, Float) -> Float,
{
    fn ode(&self, x: Float, t: Float) -> Float {
        self(x, t)
    }
}
