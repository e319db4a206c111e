use crate::{QuadratureMethod, StrError};

/// 1/√3, the Gauss-Legendre nodes on [-1, 1]
const GAUSS_NODE: f64 = 0.5773502691896257;

/// Integrates f over [a, b] using the composite trapezoidal rule
///
/// ```text
///      n-1  dx
/// I ≈   Σ   ── (f(xᵢ) + f(xᵢ₊₁))      dx = |b - a| / n
///      i=0   2
/// ```
///
/// The nodes `xᵢ = a + i (b - a) / n` walk from `a` to `b`, thus the result does not depend
/// on the orientation of the interval.
///
/// # Input
///
/// * `f` -- the integrand
/// * `a`, `b` -- the endpoints
/// * `n` -- the number of subintervals (≥ 1)
pub fn trapezoidal<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, StrError>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err("n must be at least 1");
    }
    let step = (b - a) / (n as f64);
    let dx = f64::abs(step);
    let mut f_left = f(a);
    let mut integral = 0.0;
    for i in 0..n {
        let f_right = f(a + ((i + 1) as f64) * step);
        integral += dx * (f_left + f_right) / 2.0;
        f_left = f_right;
    }
    Ok(integral)
}

/// Integrates f over [a, b] using the composite Simpson's 1/3 rule
///
/// ```text
///      dx ⎛                 n-1              n-2          ⎞
/// I ≈  ── ⎜ f(a) + f(b) + 4  Σ  f(xᵢ) + 2    Σ   f(xᵢ)    ⎟
///       3 ⎝                i odd          i even > 0      ⎠
/// ```
///
/// The rule is exact for polynomials of degree up to 3 on each pair of panels.
///
/// # Input
///
/// * `f` -- the integrand
/// * `a`, `b` -- the endpoints
/// * `n` -- the number of subintervals (even, ≥ 2)
pub fn simpson<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, StrError>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err("n must be at least 1");
    }
    if n % 2 != 0 {
        return Err("n must be even for Simpson's rule");
    }
    let step = (b - a) / (n as f64);
    let dx = f64::abs(step);
    let mut s = f(a) + f(b);
    for i in 1..n {
        let x = a + (i as f64) * step;
        if i % 2 == 0 {
            s += 2.0 * f(x);
        } else {
            s += 4.0 * f(x);
        }
    }
    Ok(dx / 3.0 * s)
}

/// Integrates f over [a, b] using the 2-point Gauss-Legendre rule
///
/// ```text
///      b - a ⎛   ⎛     b - a   1  ⎞     ⎛     b - a   1  ⎞ ⎞
/// I ≈  ───── ⎜ f ⎜ c - ───── ──── ⎟ + f ⎜ c + ───── ──── ⎟ ⎟      c = (a + b) / 2
///        2   ⎝   ⎝       2    √3  ⎠     ⎝       2    √3  ⎠ ⎠
/// ```
///
/// The rule is exact for polynomials of degree up to 3 over the whole interval. The result is
/// the signed integral, i.e., swapping `a` and `b` flips the sign.
pub fn gauss_legendre_2pt<F>(f: F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let half = (b - a) / 2.0;
    let center = (a + b) / 2.0;
    let x1 = center - half * GAUSS_NODE;
    let x2 = center + half * GAUSS_NODE;
    half * f(x1) + half * f(x2)
}

/// Integrates f over [a, b] with the given rule
///
/// The number of subintervals `n` is ignored by [QuadratureMethod::GaussLegendre2].
pub fn integrate<F>(method: QuadratureMethod, f: F, a: f64, b: f64, n: usize) -> Result<f64, StrError>
where
    F: Fn(f64) -> f64,
{
    match method {
        QuadratureMethod::Trapezoidal => trapezoidal(f, a, b, n),
        QuadratureMethod::Simpson => simpson(f, a, b, n),
        QuadratureMethod::GaussLegendre2 => Ok(gauss_legendre_2pt(f, a, b)),
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
