//! Spherical ↔ Cartesian conversion and angle normalization.
//!
//! Angles are in degrees. `phi` is the polar angle measured from the +Y
//! pole, `theta` the azimuth measured from +X towards +Z.

use glam::DVec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Convert spherical coordinates to a Cartesian point around the origin.
///
/// ```text
/// x = r · sin(φ) · cos(θ)
/// z = r · sin(φ) · sin(θ)
/// y = r · cos(φ)
/// ```
///
/// At `phi = 0` or `phi = 180` the point lies on the Y axis.
#[must_use]
pub fn spherical_to_cartesian(radius: f64, theta_deg: f64, phi_deg: f64) -> DVec3 {
    let theta = theta_deg.to_radians();
    let phi = phi_deg.to_radians();

    let x = radius * phi.sin() * theta.cos();
    let z = radius * phi.sin() * theta.sin();
    let y = radius * phi.cos();

    DVec3::new(x, y, z)
}

/// Wrap an angle in degrees into `[0, 360)`.
///
/// Negative inputs wrap forward, so `-6` becomes `354`.
#[must_use]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// A point expressed as (radius, theta, phi) with angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SphericalCoords {
    /// Distance from the origin.
    pub radius: f64,
    /// Azimuth in degrees.
    pub theta: f64,
    /// Polar angle from +Y in degrees.
    pub phi: f64,
}

impl SphericalCoords {
    /// Create a new coordinate triple.
    #[must_use]
    pub const fn new(radius: f64, theta: f64, phi: f64) -> Self {
        Self { radius, theta, phi }
    }

    /// Cartesian position of this point.
    #[must_use]
    pub fn to_cartesian(self) -> DVec3 {
        spherical_to_cartesian(self.radius, self.theta, self.phi)
    }

    /// Rotate both angles by the given deltas, wrapping each into
    /// `[0, 360)`.
    pub fn rotate_wrapping(&mut self, d_theta: f64, d_phi: f64) {
        self.theta = wrap_degrees(self.theta + d_theta);
        self.phi = wrap_degrees(self.phi + d_phi);
    }
}

impl Default for SphericalCoords {
    fn default() -> Self {
        Self::new(5.0, 33.0, 60.0)
    }
}
