//! Numerical methods for scalar real functions of a scalar real argument
//!
//! * [find_root] - bisection on a bracketing interval
//! * [estimate_derivative] - Richardson extrapolation of central differences
//! * [trapezoidal], [simpson], [gauss_legendre_2pt] - quadrature
//! * [OdeIntegrator] and [integrate_ode] - explicit fixed-step ODE integrators

pub type StrError = &'static str;

mod bisection;
mod derivative;
pub mod enums;
mod ode;
mod quadrature;
mod rhs_trait;
pub mod samples;

pub use bisection::*;
pub use derivative::*;
pub use enums::*;
pub use ode::*;
pub use quadrature::*;
pub use rhs_trait::*;
pub use samples::*;
