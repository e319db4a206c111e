use crate::StrError;

/// Holds the parameters of the bisection method
#[derive(Clone, Copy, Debug)]
pub struct BisectionParams {
    /// Tolerance on the width of the bracketing interval
    pub tol: f64,

    /// Maximum number of iterations (bisections)
    pub max_iter: usize,

    /// Absolute threshold on |f(m)| below which the midpoint m is taken as the root
    pub f_zero_tol: f64,
}

/// Holds statistics about a bisection run
#[derive(Clone, Copy, Debug, Default)]
pub struct BisectionStats {
    /// Number of bisections performed
    pub n_iterations: usize,

    /// Number of calls to f
    pub n_function_evaluations: usize,

    /// Width of the final interval
    pub width: f64,

    /// Indicates that |f(m)| fell below `f_zero_tol` or the width fell below `tol`
    pub converged: bool,

    /// Indicates that the loop stopped early because |f(m)| < `f_zero_tol`
    pub exact_hit: bool,
}

impl Default for BisectionParams {
    fn default() -> Self {
        BisectionParams {
            tol: 1e-6,
            max_iter: 1000,
            f_zero_tol: 1e-10,
        }
    }
}

impl BisectionParams {
    /// Allocates a new instance with the given width tolerance and iteration budget
    pub fn new(tol: f64, max_iter: usize) -> Self {
        BisectionParams {
            tol,
            max_iter,
            ..Default::default()
        }
    }

    /// Validates the parameters
    pub fn validate(&self) -> Result<(), StrError> {
        if self.tol.is_nan() || self.tol <= 0.0 {
            return Err("tol must be positive");
        }
        if self.max_iter == 0 {
            return Err("max_iter must be at least 1");
        }
        if self.f_zero_tol.is_nan() || self.f_zero_tol < 0.0 {
            return Err("f_zero_tol must be non-negative");
        }
        Ok(())
    }
}

/// Finds a root of f(x) = 0 in [a, b] using the bisection method
///
/// Each iteration computes the midpoint `m = (a + b) / 2`. If `|f(m)| < f_zero_tol`, `m` is
/// returned right away. Otherwise, f(a) is re-evaluated and the endpoint that keeps the sign
/// change is replaced by `m`. The loop stops when `b - a < tol` or after `max_iter` iterations;
/// the midpoint of the final interval is returned in both cases.
///
/// Running out of iterations is **not** an error: the best available midpoint is returned and
/// `stats.converged` is set to false.
///
/// # Preconditions
///
/// These are the caller's responsibility and are not checked:
///
/// * f must be continuous on [a, b]
/// * f(a) and f(b) must have opposite signs
///
/// If the interval does not bracket a root, the returned value is unspecified (the iterations
/// may approach an endpoint, a discontinuity, or any point that is not a root).
///
/// # Input
///
/// * `f` -- the function
/// * `a` -- lower endpoint (must be smaller than `b`)
/// * `b` -- upper endpoint
/// * `params` -- tolerances and iteration budget
///
/// # Output
///
/// Returns `(root, stats)`
pub fn find_root<F>(f: F, a: f64, b: f64, params: &BisectionParams) -> Result<(f64, BisectionStats), StrError>
where
    F: Fn(f64) -> f64,
{
    params.validate()?;
    if !a.is_finite() || !b.is_finite() {
        return Err("the interval endpoints must be finite");
    }
    if a >= b {
        return Err("a must be smaller than b");
    }

    let mut stats = BisectionStats::default();
    let mut a = a;
    let mut b = b;
    while (b - a) >= params.tol && stats.n_iterations < params.max_iter {
        let m = (a + b) / 2.0;
        let fm = f(m);
        let fa = f(a);
        stats.n_function_evaluations += 2;
        if f64::abs(fm) < params.f_zero_tol {
            stats.width = b - a;
            stats.converged = true;
            stats.exact_hit = true;
            log::debug!("bisection: |f({})| < {} after {} iterations", m, params.f_zero_tol, stats.n_iterations);
            return Ok((m, stats));
        } else if fm * fa < 0.0 {
            b = m;
        } else {
            a = m;
        }
        stats.n_iterations += 1;
    }

    stats.width = b - a;
    stats.converged = stats.width < params.tol;
    let root = (a + b) / 2.0;
    if stats.converged {
        log::debug!("bisection: converged to {} after {} iterations", root, stats.n_iterations);
    } else {
        log::warn!(
            "bisection: iteration budget ({}) exhausted with width {}; returning {}",
            params.max_iter,
            stats.width,
            root
        );
    }
    Ok((root, stats))
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use russell_lab::approx_eq;

    #[test]
    fn validate_captures_errors() {
        let mut params = BisectionParams::default();
        params.tol = 0.0;
        assert_eq!(params.validate().err(), Some("tol must be positive"));
        params.tol = f64::NAN;
        assert_eq!(params.validate().err(), Some("tol must be positive"));
        params.tol = 1e-6;
        params.max_iter = 0;
        assert_eq!(params.validate().err(), Some("max_iter must be at least 1"));
        params.max_iter = 10;
        params.f_zero_tol = -1.0;
        assert_eq!(params.validate().err(), Some("f_zero_tol must be non-negative"));
    }

    #[test]
    fn find_root_captures_errors() {
        let params = BisectionParams::default();
        let f = |x: f64| x;
        assert_eq!(find_root(f, 1.0, 1.0, &params).err(), Some("a must be smaller than b"));
        assert_eq!(find_root(f, 2.0, -1.0, &params).err(), Some("a must be smaller than b"));
        assert_eq!(
            find_root(f, f64::NEG_INFINITY, 1.0, &params).err(),
            Some("the interval endpoints must be finite")
        );
    }

    #[test]
    fn find_root_works() {
        let params = BisectionParams::default();
        let (root, stats) = find_root(|x| x * x - 2.0, 1.0, 2.0, &params).unwrap();
        approx_eq(root, f64::sqrt(2.0), 1e-6);
        assert!(stats.converged);
        assert!(!stats.exact_hit);
        assert!(stats.width < params.tol);
        // the width halves every iteration: 2^-20 < 1e-6 <= 2^-19
        assert_eq!(stats.n_iterations, 20);
        assert_eq!(stats.width, f64::powi(0.5, 20));
        assert_eq!(stats.n_function_evaluations, 40);
    }

    #[test]
    fn find_root_returns_exact_midpoint() {
        let params = BisectionParams::default();
        let (root, stats) = find_root(|x| x - 0.5, 0.0, 1.0, &params).unwrap();
        assert_eq!(root, 0.5);
        assert!(stats.converged);
        assert!(stats.exact_hit);
        assert_eq!(stats.n_iterations, 0);
        assert_eq!(stats.n_function_evaluations, 2);
    }

    #[test]
    fn find_root_flags_exhausted_budget() {
        let params = BisectionParams::new(1e-12, 5);
        let (root, stats) = find_root(|x| x * x - 2.0, 1.0, 2.0, &params).unwrap();
        assert!(!stats.converged);
        assert_eq!(stats.n_iterations, 5);
        assert_eq!(stats.width, 1.0 / 32.0);
        // best available midpoint is still returned
        assert!(f64::abs(root - f64::sqrt(2.0)) <= stats.width / 2.0);
    }

    #[test]
    fn find_root_handles_decreasing_function() {
        let params = BisectionParams::new(1e-10, 1000);
        let (root, stats) = find_root(|x| f64::cos(x), 0.0, 3.0, &params).unwrap();
        approx_eq(root, std::f64::consts::FRAC_PI_2, 1e-10);
        assert!(stats.converged);
    }
}
