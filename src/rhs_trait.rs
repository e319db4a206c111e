/// Defines the right-hand side of the scalar initial value problem
///
/// ```text
/// du
/// ── = f(x, u)
/// dx
/// ```
pub trait RhsTrait {
    /// Calculates du/dx = f(x,u)
    fn calc_f(&self, x: f64, u: f64) -> f64;
}

impl<F> RhsTrait for F
where
    F: Fn(f64, f64) -> f64,
{
    fn calc_f(&self, x: f64, u: f64) -> f64 {
        self(x, u)
    }
}
