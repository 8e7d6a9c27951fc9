//! A point light placed in spherical coordinates.
//!
//! Only placement lives here; how a shader shades with it is up to the
//! renderer.

use glam::DVec3;

use crate::camera::SphericalCoords;
use crate::options::LightOptions;

/// Point light orbiting the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// Position around the origin. Both angles wrap modulo 360.
    pub position: SphericalCoords,
    /// Linear RGB color.
    pub color: [f32; 3],
}

impl PointLight {
    /// Build from configuration.
    #[must_use]
    pub fn from_options(options: &LightOptions) -> Self {
        Self {
            position: options.position,
            color: options.color,
        }
    }

    /// World-space position.
    #[must_use]
    pub fn world_position(&self) -> DVec3 {
        self.position.to_cartesian()
    }

    /// Move the light around the origin by angle deltas in degrees.
    pub fn orbit(&mut self, d_theta: f64, d_phi: f64) {
        self.position.rotate_wrapping(d_theta, d_phi);
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::from_options(&LightOptions::default())
    }
}
