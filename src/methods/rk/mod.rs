//! Explicit Runge-Kutta integrators (RK2, RK4)

mod rk2;
mod rk4;

pub use rk2::{rk2, try_rk2};
pub use rk4::{rk4, try_rk4};
