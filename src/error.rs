//! Errors for integration methods

use thiserror::Error;

use crate::Float;

/// Validation errors returned by the fixed-step entry points.
///
/// Failures raised by the right-hand side itself never pass through this type;
/// the `try_*` entry points hand them back to the caller untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("n_steps must be at least 2 to define a step size (got {0})")]
    TooFewSteps(usize),
    #[error("{name} must be finite (got {value})")]
    NonFiniteInput { name: &'static str, value: Float },
    #[error("unknown integration method '{0}' (expected one of: euler, rk2, rk4)")]
    UnknownMethod(String),
}
