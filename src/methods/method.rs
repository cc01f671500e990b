//! Method selection

use std::{fmt, str::FromStr};

use crate::error::Error;

/// Fixed-step integration scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Forward Euler, first order
    Euler,
    /// Midpoint Runge-Kutta, second order
    RK2,
    /// Classic Runge-Kutta, fourth order
    #[default]
    RK4,
}

impl Method {
    /// Order of global accuracy.
    pub const fn order(self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::RK2 => 2,
            Method::RK4 => 4,
        }
    }

    /// Evaluations of the right-hand side per step.
    pub const fn stages(self) -> usize {
        match self {
            Method::Euler => 1,
            Method::RK2 => 2,
            Method::RK4 => 4,
        }
    }

    /// Every method, lowest order first.
    pub const ALL: [Method; 3] = [Method::Euler, Method::RK2, Method::RK4];
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Euler => "Euler",
            Method::RK2 => "RK2",
            Method::RK4 => "RK4",
        };
        f.write_str(name)
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "rk2" | "midpoint" => Ok(Method::RK2),
            "rk4" => Ok(Method::RK4),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}
