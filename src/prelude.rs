//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use fixed_step::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, `Solution`, `Error`, `Float`.
//! - Methods: `euler`, `rk2`, `rk4` and their fallible `try_*` forms, `Method`.
//! - High-level API: `solve`, `try_solve`, `Options`.
//!

pub use crate::{
    Float,
    core::{ode::ODE, solution::Solution},
    error::Error,
    methods::{Method, euler, rk2, rk4, try_euler, try_rk2, try_rk4},
    solve::{Options, solve, try_solve},
};
