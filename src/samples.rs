//! Sample problems with known solutions, used to check the numerical methods

use crate::{RhsTrait, StrError};
use std::collections::HashMap;

/// Dahlquist test equation
///
/// ```text
/// u(x) = u0 e^(-λ (x - x0))
/// du/dx = -λ u
/// ```
pub struct Dahlquist {
    lambda: f64,
}

impl Dahlquist {
    /// Allocates a new instance
    ///
    /// # Parameters
    ///
    /// * `lambda` - decay constant (λ)
    pub fn new(params: HashMap<&str, f64>) -> Result<Self, StrError> {
        let lambda = *params.get("lambda").ok_or("Parameter 'lambda' not found")?;
        Ok(Dahlquist { lambda })
    }

    /// Calculates u(x) given u(x0) = u0
    pub fn analytical_u(lambda: f64, x0: f64, u0: f64, x: f64) -> f64 {
        u0 * f64::exp(-lambda * (x - x0))
    }
}

impl RhsTrait for Dahlquist {
    fn calc_f(&self, _x: f64, u: f64) -> f64 {
        -self.lambda * u
    }
}

/// Separable equation with a cubic source
///
/// ```text
/// du
/// ── = x² e^(-u-1)     u(0) = 1
/// dx
///
///          ⎛  x³     ⎞
/// u(x) = ln⎜ ──── + e⎟
///          ⎝  3e     ⎠
/// ```
pub struct CubicSource;

impl CubicSource {
    /// Initial condition u(0)
    pub const U0: f64 = 1.0;

    /// Calculates u(x)
    pub fn analytical_u(x: f64) -> f64 {
        let e = std::f64::consts::E;
        f64::ln(x * x * x / (3.0 * e) + e)
    }
}

impl RhsTrait for CubicSource {
    fn calc_f(&self, x: f64, u: f64) -> f64 {
        x * x * f64::exp(-u - 1.0)
    }
}

/// Riccati equation without a closed-form solution
///
/// ```text
/// dv
/// ── = 1 - 2 v² - t
/// dt
/// ```
pub struct Riccati;

impl RhsTrait for Riccati {
    fn calc_f(&self, t: f64, v: f64) -> f64 {
        1.0 - 2.0 * v * v - t
    }
}

/// Range residual of a projectile launched from a wall
///
/// The projectile leaves a wall of height h with speed v0 at angle θ above the horizontal and
/// lands at the horizontal distance:
///
/// ```text
///        v0 cos θ ⎛                  _________________ ⎞
/// R(v0) = ──────── ⎜ v0 sin θ  +  \╱ v0² sin²θ + 2 h g ⎟
///           g     ⎝                                    ⎠
/// ```
///
/// The root of `R(v0) - x_target` is the launch speed that hits the target.
pub struct ProjectileRange {
    x_target: f64, // target distance
    height: f64,   // wall height (h)
    g: f64,        // gravitational acceleration
    sin: f64,      // sin θ
    cos: f64,      // cos θ
}

impl ProjectileRange {
    /// Allocates a new instance
    ///
    /// # Parameters
    ///
    /// * `x_target` - horizontal distance to the target
    /// * `height` - height of the launch point above the ground
    /// * `angle_deg` - launch angle above the horizontal, in degrees
    /// * `g` - gravitational acceleration
    pub fn new(params: HashMap<&str, f64>) -> Result<Self, StrError> {
        let x_target = *params.get("x_target").ok_or("Parameter 'x_target' not found")?;
        let height = *params.get("height").ok_or("Parameter 'height' not found")?;
        let angle_deg = *params.get("angle_deg").ok_or("Parameter 'angle_deg' not found")?;
        let g = *params.get("g").ok_or("Parameter 'g' not found")?;
        if g <= 0.0 {
            return Err("Parameter 'g' must be positive");
        }
        let theta = angle_deg.to_radians();
        Ok(ProjectileRange {
            x_target,
            height,
            g,
            sin: f64::sin(theta),
            cos: f64::cos(theta),
        })
    }

    /// Calculates R(v0) - x_target
    pub fn residual(&self, v0: f64) -> f64 {
        (v0 * self.cos / self.g) * (v0 * self.sin + self.vertical_impact_speed(v0)) - self.x_target
    }

    /// Calculates the time of flight
    pub fn flight_time(&self, v0: f64) -> f64 {
        (v0 * self.sin + self.vertical_impact_speed(v0)) / self.g
    }

    /// Calculates the maximum height above the ground
    pub fn max_height(&self, v0: f64) -> f64 {
        v0 * v0 * self.sin * self.sin / (2.0 * self.g) + self.height
    }

    /// Calculates the speed of the equivalent launch from the ground
    ///
    /// The equivalent trajectory starts at ground level and passes through the same apex with the
    /// same horizontal velocity.
    pub fn ground_speed(&self, v0: f64) -> f64 {
        let vy2 = 2.0 * self.g * self.max_height(v0);
        let vx = v0 * self.cos;
        f64::sqrt(vy2 + vx * vx)
    }

    /// Calculates the launch angle (degrees) of the equivalent launch from the ground
    pub fn ground_angle(&self, v0: f64) -> f64 {
        let v = self.ground_speed(v0);
        let t = self.flight_time(v0);
        f64::acos(self.x_target / (v * t)).to_degrees()
    }

    /// Vertical speed at ground level
    fn vertical_impact_speed(&self, v0: f64) -> f64 {
        f64::sqrt(v0 * v0 * self.sin * self.sin + 2.0 * self.height * self.g)
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
