/// Holds the explicit single-step ODE methods
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OdeMethod {
    /// Forward Euler, first order
    Euler,

    /// Two-stage Runge-Kutta family, second order, parametrized by α
    ///
    /// α = 1/2 is the midpoint method and α = 1 is Heun's method
    Rk2,

    /// Classical four-stage Runge-Kutta, fourth order
    Rk4,
}

/// Holds the quadrature rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuadratureMethod {
    /// Composite trapezoidal rule
    Trapezoidal,

    /// Composite Simpson's 1/3 rule (requires an even number of subintervals)
    Simpson,

    /// Two-point Gauss-Legendre rule over the whole interval
    GaussLegendre2,
}

impl OdeMethod {
    /// Returns the order of the global truncation error
    pub fn order(&self) -> usize {
        match self {
            OdeMethod::Euler => 1,
            OdeMethod::Rk2 => 2,
            OdeMethod::Rk4 => 4,
        }
    }

    /// Returns the number of right-hand side evaluations per step
    pub fn n_stages(&self) -> usize {
        match self {
            OdeMethod::Euler => 1,
            OdeMethod::Rk2 => 2,
            OdeMethod::Rk4 => 4,
        }
    }
}

impl QuadratureMethod {
    /// Returns the highest polynomial degree integrated exactly on each panel
    pub fn degree_of_exactness(&self) -> usize {
        match self {
            QuadratureMethod::Trapezoidal => 1,
            QuadratureMethod::Simpson => 3,
            QuadratureMethod::GaussLegendre2 => 3,
        }
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
