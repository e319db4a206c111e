use crate::StrError;
use russell_lab::Matrix;

/// Holds the parameters of the Richardson extrapolation
#[derive(Clone, Copy, Debug)]
pub struct DerivativeParams {
    /// Initial step size (h0)
    pub h0: f64,

    /// Number of extrapolation levels (N); the table has (N+1)×(N+1) entries
    pub n: usize,
}

impl Default for DerivativeParams {
    fn default() -> Self {
        DerivativeParams { h0: 0.1, n: 5 }
    }
}

/// Estimates f'(x) by Richardson extrapolation of central differences
///
/// The first column of the table holds central differences with halving step sizes:
///
/// ```text
///           f(x + hᵢ) - f(x - hᵢ)
/// D[i][0] = ─────────────────────     hᵢ = h0 / 2ⁱ,   i = 0..N
///                   2 hᵢ
/// ```
///
/// and the remaining columns cancel the leading O(h²ʲ) error terms:
///
/// ```text
///                       D[i][j-1] - D[i-1][j-1]
/// D[i][j] = D[i][j-1] + ───────────────────────     j = 1..N,  i = j..N
///                              4ʲ - 1
/// ```
///
/// Returns D[N][N].
///
/// # Limitations
///
/// No error estimate is computed. For a very small `h0` or a large `n`, the central differences
/// suffer from floating-point cancellation and the extrapolated value may be meaningless;
/// this is neither detected nor reported.
///
/// # Input
///
/// * `f` -- the function
/// * `x` -- the point where the derivative is estimated
/// * `h0` -- the initial step size (non-zero and finite)
/// * `n` -- the number of extrapolation levels
pub fn estimate_derivative<F>(f: F, x: f64, h0: f64, n: usize) -> Result<f64, StrError>
where
    F: Fn(f64) -> f64,
{
    let table = richardson_table(&f, x, h0, n)?;
    Ok(table.get(n, n))
}

/// Estimates f'(x) using the step size and number of levels given by `params`
pub fn estimate_derivative_with<F>(f: F, x: f64, params: &DerivativeParams) -> Result<f64, StrError>
where
    F: Fn(f64) -> f64,
{
    estimate_derivative(f, x, params.h0, params.n)
}

/// Builds the lower-triangular extrapolation table
fn richardson_table<F>(f: &F, x: f64, h0: f64, n: usize) -> Result<Matrix, StrError>
where
    F: Fn(f64) -> f64,
{
    if !h0.is_finite() || h0 == 0.0 {
        return Err("h0 must be finite and non-zero");
    }
    let mut dd = Matrix::new(n + 1, n + 1);
    let mut h = h0;
    for i in 0..(n + 1) {
        dd.set(i, 0, (f(x + h) - f(x - h)) / (2.0 * h));
        h /= 2.0;
    }
    let mut four_j = 1.0;
    for j in 1..(n + 1) {
        four_j *= 4.0;
        for i in j..(n + 1) {
            let prev = dd.get(i, j - 1);
            dd.set(i, j, prev + (prev - dd.get(i - 1, j - 1)) / (four_j - 1.0));
        }
    }
    log::debug!("richardson: D[{}][{}] = {} at x = {}", n, n, dd.get(n, n), x);
    Ok(dd)
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
