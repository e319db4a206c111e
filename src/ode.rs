use crate::{OdeMethod, RhsTrait, StrError};
use std::collections::HashMap;

/// Default α of the two-stage Runge-Kutta method (Heun)
const DEFAULT_ALPHA: f64 = 1.0;

/// Implements explicit fixed-step integrators for scalar initial value problems
///
/// ```text
/// du
/// ── = f(x, u)     u(a) = u0     x ∈ [a, b]
/// dx
/// ```
///
/// The integrator holds only the method and its parameters; nothing persists between calls.
#[derive(Clone, Copy, Debug)]
pub struct OdeIntegrator {
    method: OdeMethod,
    alpha: f64,
}

impl OdeIntegrator {
    /// Allocates a new instance
    ///
    /// # Parameters
    ///
    /// * `alpha` - (Rk2 only; optional, default 1.0) position of the second stage (α ≠ 0).
    ///   α = 0.5 gives the midpoint method and α = 1 gives Heun's method
    pub fn new(method: OdeMethod, params: HashMap<&str, f64>) -> Result<Self, StrError> {
        let alpha = *params.get("alpha").unwrap_or(&DEFAULT_ALPHA);
        if method == OdeMethod::Rk2 && (alpha == 0.0 || !alpha.is_finite()) {
            return Err("Parameter 'alpha' must be finite and non-zero");
        }
        Ok(OdeIntegrator { method, alpha })
    }

    /// Returns the method
    pub fn method(&self) -> OdeMethod {
        self.method
    }

    /// Returns α (only meaningful for Rk2)
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Advances the solution by one step of size h, from (x, u) to x + h
    pub fn step<F>(&self, f: &F, x: f64, u: f64, h: f64) -> f64
    where
        F: RhsTrait + ?Sized,
    {
        match self.method {
            OdeMethod::Euler => u + h * f.calc_f(x, u),
            OdeMethod::Rk2 => {
                let a = self.alpha;
                let k1 = h * f.calc_f(x, u);
                let k2 = h * f.calc_f(x + a * h, u + a * k1);
                u + (1.0 - 1.0 / (2.0 * a)) * k1 + k2 / (2.0 * a)
            }
            OdeMethod::Rk4 => {
                let k1 = f.calc_f(x, u);
                let k2 = f.calc_f(x + h / 2.0, u + h * k1 / 2.0);
                let k3 = f.calc_f(x + h / 2.0, u + h * k2 / 2.0);
                let k4 = f.calc_f(x + h, u + h * k3);
                u + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
            }
        }
    }

    /// Integrates the IVP over [a, b] using n equal steps
    ///
    /// Returns `(xx, uu)` where:
    ///
    /// - `xx` is the grid `a + i h` with `h = (b - a) / n`, `i = 0..n` (the last point is exactly b)
    /// - `uu` holds the approximations of u(xᵢ), with `uu[0] = u0`
    ///
    /// Both vectors have length n + 1.
    pub fn integrate<F>(&self, f: &F, a: f64, b: f64, u0: f64, n: usize) -> Result<(Vec<f64>, Vec<f64>), StrError>
    where
        F: RhsTrait + ?Sized,
    {
        if n == 0 {
            return Err("n must be at least 1");
        }
        let h = (b - a) / (n as f64);
        let mut xx = vec![0.0; n + 1];
        let mut uu = vec![0.0; n + 1];
        xx[0] = a;
        uu[0] = u0;
        for i in 1..=n {
            xx[i] = if i == n { b } else { a + (i as f64) * h };
            uu[i] = self.step(f, xx[i - 1], uu[i - 1], h);
        }
        log::debug!("{:?}: u({}) ≈ {} with {} steps of size {}", self.method, b, uu[n], n, h);
        Ok((xx, uu))
    }
}

/// Integrates du/dx = f(x, u) over [a, b] with n equal steps of the given method
///
/// See [OdeIntegrator::new] for the recognized `params` and [OdeIntegrator::integrate] for the output.
pub fn integrate_ode<F>(
    method: OdeMethod,
    f: F,
    a: f64,
    b: f64,
    u0: f64,
    n: usize,
    params: HashMap<&str, f64>,
) -> Result<(Vec<f64>, Vec<f64>), StrError>
where
    F: RhsTrait,
{
    let integrator = OdeIntegrator::new(method, params)?;
    integrator.integrate(&f, a, b, u0, n)
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
