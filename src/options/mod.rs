//! Centralized camera/scene options with TOML preset support.
//!
//! All tweakable settings (initial pose, step sizes, limits, projection,
//! light placement, drag sensitivity, keybindings) are consolidated here.
//! Options serialize to/from TOML so each scene can ship its own preset.

mod camera;
mod input;
mod lighting;
mod projection;

use std::path::Path;

pub use camera::CameraOptions;
pub use input::InputOptions;
pub use lighting::LightOptions;
pub use projection::ProjectionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;
use crate::input::{InputProcessor, KeyBindings};

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Initial pose, steps, and limits.
    pub camera: CameraOptions,
    /// Perspective projection.
    pub projection: ProjectionOptions,
    /// Point light placement.
    pub light: LightOptions,
    /// Mouse drag parameters.
    pub input: InputOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbitError> {
        let content = std::fs::read_to_string(path).map_err(OrbitError::Io)?;
        let options: Self =
            toml::from_str(&content).map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbitError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitError::Io)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }

    /// Check every section for values that cannot drive a scene.
    pub fn validate(&self) -> Result<(), OrbitError> {
        self.camera.config().validate()?;
        self.projection.projection().validate()?;
        let drag_ok = self.input.drag_degrees.is_finite() && self.input.drag_degrees > 0.0;
        if !drag_ok {
            return Err(OrbitError::InvalidConfig(format!(
                "drag_degrees must be positive and finite, got {}",
                self.input.drag_degrees
            )));
        }
        Ok(())
    }

    /// Input processor configured from the `input` and `keybindings`
    /// sections.
    #[must_use]
    pub fn input_processor(&self) -> InputProcessor {
        InputProcessor::with_key_bindings(self.keybindings.clone())
            .with_drag_degrees(self.input.drag_degrees)
            .with_viewport_width(self.input.viewport_width)
    }
}
