use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Mouse drag parameters.
pub struct InputOptions {
    /// Degrees of rotation for a drag across the full viewport width.
    #[schemars(title = "Drag Sensitivity", range(min = 10.0, max = 720.0), extend("step" = 10.0))]
    pub drag_degrees: f64,
    /// Viewport width assumed until the first resize event.
    #[schemars(skip)]
    pub viewport_width: u32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            drag_degrees: 180.0,
            viewport_width: 500,
        }
    }
}
