use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{DepthRange, Projection};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Projection", inline)]
#[serde(default)]
/// Perspective projection parameters.
pub struct ProjectionOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f64,
    /// Initial aspect ratio, replaced on the first resize.
    #[schemars(skip)]
    pub aspect: f64,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f64,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f64,
    /// Clip-space depth convention.
    #[schemars(title = "Depth Range")]
    pub depth: DepthRange,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        let proj = Projection::default();
        Self {
            fovy: proj.fovy,
            aspect: proj.aspect,
            znear: proj.znear,
            zfar: proj.zfar,
            depth: proj.depth,
        }
    }
}

impl ProjectionOptions {
    /// Projection described by these options.
    #[must_use]
    pub fn projection(&self) -> Projection {
        Projection {
            fovy: self.fovy,
            aspect: self.aspect,
            znear: self.znear,
            zfar: self.zfar,
            depth: self.depth,
        }
    }
}
