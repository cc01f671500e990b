//! # Example: Method Comparison
//!
//! Compare Euler, RK2 and RK4 on x' = x + t and show how the end-point error
//! shrinks as the grid is refined.
//!
//! Exact solution with x(0) = 0: x(t) = e^t - t - 1
//!

use fixed_step::prelude::*;

fn main() {
    let f = |x: Float, t: Float| x + t;
    let exact = |t: Float| t.exp() - t - 1.0;
    let (a, b) = (0.0, 1.0);

    println!("{:>8} {:>12} {:>12} {:>12}", "n_steps", "Euler", "RK2", "RK4");
    for n_steps in [5, 9, 17, 33, 65] {
        let mut row = format!("{:>8}", n_steps);
        for method in Method::ALL {
            let options = Options::builder().method(method).build();
            match solve(&f, a, b, n_steps, options) {
                Ok(sol) => {
                    let (t_end, x_end) = sol.last();
                    row.push_str(&format!(" {:>12.3e}", (x_end - exact(t_end)).abs()));
                }
                Err(e) => {
                    eprintln!("{} failed: {}", method, e);
                    return;
                }
            }
        }
        println!("{}", row);
    }

    println!();
    for method in Method::ALL {
        println!(
            "{}: order {}, {} evaluations per step",
            method,
            method.order(),
            method.stages()
        );
    }
}
