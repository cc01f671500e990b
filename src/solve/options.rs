//! Options and method selection for solve

use bon::Builder;

use crate::{Float, methods::Method};

#[derive(Builder, Clone, Debug, PartialEq)]
/// Options for [`solve`](crate::solve::solve).
pub struct Options {
    /// Method to use. Default: RK4.
    #[builder(default)]
    pub method: Method,
    /// Initial value of the state at `a`. Default: 0.0.
    #[builder(default = 0.0)]
    pub x0: Float,
}

impl Default for Options {
    fn default() -> Self {
        Options::builder().build()
    }
}
