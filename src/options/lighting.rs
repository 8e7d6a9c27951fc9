use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::SphericalCoords;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Light", inline)]
#[serde(default)]
/// Placement and color of the scene's point light.
pub struct LightOptions {
    /// Position around the origin.
    #[schemars(title = "Position")]
    pub position: SphericalCoords,
    /// Linear RGB color.
    #[schemars(skip)]
    pub color: [f32; 3],
}

impl Default for LightOptions {
    fn default() -> Self {
        Self {
            position: SphericalCoords::new(30.0, 100.0, 25.0),
            color: [1.0, 1.0, 1.0],
        }
    }
}
