//! Perspective projection and viewport aspect tracking.

use glam::DMat4;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Clip-space depth convention of the target graphics API.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DepthRange {
    /// OpenGL / WebGL convention, depth in `[-1, 1]`.
    #[default]
    NegOneToOne,
    /// wgpu / Vulkan / Metal convention, depth in `[0, 1]`.
    ZeroToOne,
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f64,
    /// Viewport aspect ratio (width / height).
    pub aspect: f64,
    /// Near clipping plane distance.
    pub znear: f64,
    /// Far clipping plane distance.
    pub zfar: f64,
    /// Depth convention for the produced matrix.
    pub depth: DepthRange,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            aspect: 1.0,
            znear: 0.1,
            zfar: 100.0,
            depth: DepthRange::NegOneToOne,
        }
    }
}

impl Projection {
    /// Check that the parameters describe a usable frustum.
    pub fn validate(&self) -> Result<(), OrbitError> {
        let fovy_ok = self.fovy > 0.0 && self.fovy < 180.0;
        if !fovy_ok {
            return Err(OrbitError::InvalidConfig(format!(
                "fovy must be in (0, 180) degrees, got {}",
                self.fovy
            )));
        }
        let aspect_ok = self.aspect.is_finite() && self.aspect > 0.0;
        if !aspect_ok {
            return Err(OrbitError::InvalidConfig(format!(
                "aspect must be positive and finite, got {}",
                self.aspect
            )));
        }
        let planes_ok = self.znear > 0.0 && self.znear < self.zfar && self.zfar.is_finite();
        if !planes_ok {
            return Err(OrbitError::InvalidConfig(format!(
                "clip planes must satisfy 0 < znear < zfar < inf, got {} / {}",
                self.znear, self.zfar
            )));
        }
        Ok(())
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn matrix(&self) -> DMat4 {
        let fovy = self.fovy.to_radians();
        match self.depth {
            DepthRange::NegOneToOne => {
                DMat4::perspective_rh_gl(fovy, self.aspect, self.znear, self.zfar)
            }
            DepthRange::ZeroToOne => {
                DMat4::perspective_rh(fovy, self.aspect, self.znear, self.zfar)
            }
        }
    }

    /// Update the aspect ratio from a viewport size. Returns `false` (and
    /// leaves the aspect untouched) for a zero-sized viewport.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = f64::from(width) / f64::from(height);
        true
    }
}
