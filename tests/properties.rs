use approx::{assert_abs_diff_eq, assert_relative_eq};
use fixed_step::prelude::*;

mod common;
use common::{Counting, run};

#[test]
fn lengths_and_initial_value() {
    for method in Method::ALL {
        for n_steps in [2, 3, 10, 257] {
            let sol = run(method, &|x: Float, t: Float| x * t, -1.0, 2.0, n_steps, 0.75);
            assert_eq!(sol.x.len(), n_steps);
            assert_eq!(sol.t.len(), n_steps);
            assert_eq!(sol.x[0], 0.75);
            assert_eq!(sol.nstep, n_steps - 1);
            assert_eq!(sol.method, method);
        }
    }
}

#[test]
fn zero_initial_value_by_default() {
    let sol = solve(&|_x: Float, _t: Float| 1.0, 0.0, 1.0, 5, Options::default()).unwrap();
    assert_eq!(sol.x[0], 0.0);
    assert_eq!(sol.method, Method::RK4);
}

#[test]
fn time_grid_is_evenly_spaced() {
    let (a, b, n_steps) = (0.3, 7.1, 41);
    let spacing = (b - a) / (n_steps - 1) as Float;
    for method in Method::ALL {
        let sol = run(method, &|x: Float, _t: Float| -x, a, b, n_steps, 1.0);
        assert_eq!(sol.t[0], a);
        assert_eq!(sol.t[n_steps - 1], b);
        assert_relative_eq!(sol.h, spacing, max_relative = 1e-12);
        for w in sol.t.windows(2) {
            assert_abs_diff_eq!(w[1] - w[0], spacing, epsilon = 1e-12);
        }
    }
}

#[test]
fn zero_derivative_keeps_state_constant() {
    for method in Method::ALL {
        let sol = run(method, &|_x: Float, _t: Float| 0.0, 0.0, 10.0, 50, 0.0);
        assert!(sol.x.iter().all(|&x| x == 0.0));

        let sol = run(method, &|_x: Float, _t: Float| 0.0, 0.0, 10.0, 50, -3.5);
        assert!(sol.x.iter().all(|&x| x == -3.5));
    }
}

#[test]
fn constant_derivative_is_reproduced_exactly() {
    let (a, b, k) = (1.0, 4.0, 2.5);
    for method in Method::ALL {
        let sol = run(method, &|_x: Float, _t: Float| k, a, b, 31, 0.0);
        for (t, x) in sol.iter() {
            assert_abs_diff_eq!(x, k * (t - a), epsilon = 1e-12);
        }
    }
}

#[test]
fn rk4_unit_slope_reaches_one() {
    let sol = rk4(&|_x: Float, _t: Float| 1.0, 0.0, 1.0, 1000, 0.0).unwrap();
    let (t_end, x_end) = sol.last();
    assert_eq!(t_end, 1.0);
    assert_abs_diff_eq!(x_end, 1.0, epsilon = 1e-9);
    for (t, x) in &sol {
        assert_abs_diff_eq!(x, t, epsilon = 1e-9);
    }
}

#[test]
fn single_step_evaluation_counts() {
    for method in Method::ALL {
        let f = Counting::new(|x: Float, t: Float| x + t);
        let sol = run(method, &f, 0.0, 1.0, 2, 1.0);
        assert_eq!(f.calls.get(), method.stages());
        assert_eq!(sol.nfev, method.stages());
        assert_eq!(sol.nstep, 1);
    }
}

#[test]
fn evaluation_counts_scale_with_steps() {
    for method in Method::ALL {
        let f = Counting::new(|x: Float, _t: Float| x);
        let sol = run(method, &f, 0.0, 1.0, 101, 1.0);
        assert_eq!(f.calls.get(), 100 * method.stages());
        assert_eq!(sol.nfev, f.calls.get());
    }
}

#[test]
fn earlier_entries_do_not_depend_on_later_grid_points() {
    // Truncating the interval on the same spacing must reproduce the prefix.
    for method in Method::ALL {
        let f = |x: Float, t: Float| (x * t).cos();
        let long = run(method, &f, 0.0, 2.0, 21, 0.5);
        let short = run(method, &f, 0.0, long.t[10], 11, 0.5);
        for i in 0..11 {
            assert_relative_eq!(short.x[i], long.x[i], max_relative = 1e-12);
        }
    }
}

#[test]
fn interpolant_passes_through_samples() {
    let sol = rk4(&|x: Float, _t: Float| -x, 0.0, 1.0, 11, 1.0).unwrap();
    for (t, x) in sol.iter() {
        assert_abs_diff_eq!(sol.sol(t).unwrap(), x, epsilon = 1e-15);
    }
    let mid = sol.sol(0.05).unwrap();
    assert!(mid < sol.x[0] && mid > sol.x[1]);
    assert_eq!(sol.sol(1.5), None);
}

#[test]
fn crate_root_solve_is_the_entry_point() {
    use fixed_step::solve;

    let options = fixed_step::solve::Options::builder().method(Method::RK2).build();
    let sol = solve(&|_x: Float, _t: Float| 2.0, 0.0, 1.0, 3, options).unwrap();
    assert_eq!(sol.x, vec![0.0, 1.0, 2.0]);
    assert_eq!(sol.method, Method::RK2);
}
