//! # Example: Exponential Decay
//!
//! Solve the exponential decay equation and compare against the exact solution.
//!
//! Equation:
//! dx/dt = -x
//!
//! Initial condition: x(0) = 1.0
//!

use fixed_step::prelude::*;

struct Decay;

impl ODE for Decay {
    fn ode(&self, x: Float, _t: Float) -> Float {
        -x
    }
}

fn main() {
    let options = Options::builder()
        // Default method is RK4
        .x0(1.0)
        .build();

    match solve(&Decay, 0.0, 5.0, 51, options) {
        Ok(sol) => {
            let (t_end, x_end) = sol.last();
            println!("Final state: t = {:.5}, x = {:.8}", t_end, x_end);
            println!("Number of function evaluations: {}", sol.nfev);
            println!("Number of steps taken: {}", sol.nstep);

            for (t, x) in sol.iter() {
                println!("t = {:.4}, x = {:.8}, error = {:.2e}", t, x, (x - (-t).exp()).abs());
            }

            // Values between grid points come from the linear interpolant.
            if let Some(x) = sol.sol(2.55) {
                println!("interpolated x(2.55) = {:.6}", x);
            }
        }
        Err(e) => eprintln!("Integration failed: {}", e),
    }
}
