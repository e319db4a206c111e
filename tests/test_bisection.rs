use numkit::{BisectionParams, ProjectileRange, find_root};
use russell_lab::approx_eq;
use std::collections::HashMap;
use std::thread;

#[test]
fn test_projectile_from_a_wall() {
    // Allocate the problem
    let problem = ProjectileRange::new(HashMap::from([
        ("x_target", 300.0),
        ("height", 61.0),
        ("angle_deg", 45.0),
        ("g", 9.81),
    ]))
    .unwrap();

    // Find the launch speed
    let params = BisectionParams::default();
    let (v0, stats) = find_root(|v| problem.residual(v), 0.0, 70.0, &params).unwrap();
    println!("v0 = {}, {:?}", v0, stats);
    assert!(stats.converged);
    assert_eq!(stats.n_iterations, 27);
    approx_eq(v0, 49.45408347994089, 1e-10);
    approx_eq(problem.residual(v0), 0.0, 1e-4);

    // Derived quantities
    approx_eq(problem.flight_time(v0), 8.578949180785946, 1e-9);
    approx_eq(problem.max_height(v0), 123.32686984813868, 1e-9);
    approx_eq(problem.ground_speed(v0), 60.35334599540412, 1e-9);
    approx_eq(problem.ground_angle(v0), 54.590960941074, 1e-8);
}

#[test]
fn test_width_halves_every_iteration() {
    let f = |x: f64| x * x * x - x - 2.0;
    let (a, b) = (1.0, 2.0);
    let mut previous = b - a;
    for max_iter in 1..=15 {
        let params = BisectionParams::new(1e-12, max_iter);
        let (root, stats) = find_root(f, a, b, &params).unwrap();
        assert_eq!(stats.n_iterations, max_iter);
        approx_eq(stats.width, previous / 2.0, 1e-15);
        assert!(f64::abs(root - 1.5213797068045676) <= stats.width / 2.0);
        previous = stats.width;
    }
}

#[test]
fn test_iteration_count_is_logarithmic() {
    let f = |x: f64| f64::exp(x) - 3.0;
    for tol in [1e-3, 1e-6, 1e-9] {
        let params = BisectionParams {
            tol,
            max_iter: 1000,
            f_zero_tol: 0.0,
        };
        let (root, stats) = find_root(f, 0.0, 4.0, &params).unwrap();
        let expected = f64::ceil(f64::log2(4.0 / tol)) as usize;
        assert_eq!(stats.n_iterations, expected);
        assert!(stats.width < tol);
        approx_eq(root, f64::ln(3.0), tol);
    }
}

#[test]
fn test_unbracketed_interval_is_not_an_error() {
    // no sign change: the iterations drift toward the upper endpoint
    let (root, stats) = find_root(|x| x * x + 1.0, -1.0, 2.0, &BisectionParams::default()).unwrap();
    assert!(stats.converged);
    approx_eq(root, 2.0, 1e-6);
}

#[test]
fn test_concurrent_problems() {
    let angles = [30.0, 45.0, 60.0];
    let roots = thread::scope(|scope| {
        let handles = angles
            .iter()
            .map(|&angle_deg| {
                scope.spawn(move || {
                    let problem = ProjectileRange::new(HashMap::from([
                        ("x_target", 300.0),
                        ("height", 61.0),
                        ("angle_deg", angle_deg),
                        ("g", 9.81),
                    ]))
                    .unwrap();
                    let (v0, _) = find_root(|v| problem.residual(v), 0.0, 100.0, &BisectionParams::default()).unwrap();
                    v0
                })
            })
            .collect::<Vec<_>>();
        handles.into_iter().map(|h| h.join().unwrap()).collect::<Vec<_>>()
    });
    for (i, &angle_deg) in angles.iter().enumerate() {
        let problem = ProjectileRange::new(HashMap::from([
            ("x_target", 300.0),
            ("height", 61.0),
            ("angle_deg", angle_deg),
            ("g", 9.81),
        ]))
        .unwrap();
        let (v0, _) = find_root(|v| problem.residual(v), 0.0, 100.0, &BisectionParams::default()).unwrap();
        assert_eq!(roots[i], v0);
    }
}
