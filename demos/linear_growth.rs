//! # Example: Linear Growth
//!
//! Constant slope starting from zero; RK4 reproduces the straight line x = t.
//!
//! Equation:
//! dx/dt = 1
//!
//! Initial condition: x(0) = 0.0
//!

use fixed_step::prelude::*;

fn main() {
    match rk4(&|_x: Float, _t: Float| 1.0, 0.0, 1.0, 1000, 0.0) {
        Ok(sol) => {
            let (t_end, x_end) = sol.last();
            println!("Final state: t = {:.5}, x = {:.12}", t_end, x_end);
            println!("Step size: {:e}", sol.h);
            println!("Number of function evaluations: {}", sol.nfev);
            println!("Number of steps taken: {}", sol.nstep);

            for (t, x) in sol.iter().step_by(111) {
                println!("t = {:.4}, x = {:.6}", t, x);
            }
        }
        Err(e) => eprintln!("Integration failed: {}", e),
    }
}
