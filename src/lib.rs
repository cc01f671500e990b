//! Fixed-step explicit integrators for scalar first-order ordinary differential equations.
//!
//! Solves x'(t) = f(x, t) on a uniform grid of `n_steps` samples spanning `[a, b]`
//! with one of three classical schemes:
//!
//! - [`euler`]: forward Euler, first order, one evaluation of `f` per step.
//! - [`rk2`]: midpoint Runge-Kutta, second order, two evaluations per step.
//! - [`rk4`]: classical Runge-Kutta, fourth order, four evaluations per step.
//!
//! ```rust
//! use fixed_step::prelude::*;
//!
//! let sol = rk4(&|_x: f64, _t: f64| 1.0, 0.0, 1.0, 1000, 0.0).unwrap();
//! let (t_end, x_end) = sol.last();
//! assert_eq!(t_end, 1.0);
//! assert!((x_end - 1.0).abs() < 1e-9);
//! ```

mod core;
mod error;

pub mod methods;
pub mod prelude;
pub mod solve;

#[cfg(feature = "python")]
mod python;

pub use crate::core::{
    grid::{lerp, linspace},
    ode::ODE,
    solution::{Solution, SolutionIter},
};
pub use error::Error;
pub use methods::{Method, euler, rk2, rk4, try_euler, try_rk2, try_rk4};
pub use solve::{Options, solve, try_solve};

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f128, f64, f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
