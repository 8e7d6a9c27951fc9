//! Converts raw platform events into scene commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag detection, viewport width) and the key-binding map. It is the only
//! thing that sits between raw window events and
//! [`Scene::execute`](crate::scene::Scene::execute).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use super::mouse::DragState;
use crate::command::{CameraCommand, SceneCommand};

/// Maps physical key strings to camera commands.
///
/// Key strings use the `KeyboardEvent.code` / winit `KeyCode` spelling:
/// `"KeyQ"`, `"ArrowLeft"`, etc.
///
/// Only *discrete* commands make sense as key bindings; `Orbit` is
/// produced by the drag interpreter, not key lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`CameraCommand`] that can be
/// key-bound (discrete, parameterless actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Step the radius outward.
    IncreaseRadius,
    /// Step the radius inward.
    DecreaseRadius,
    /// Step theta down.
    RotateLeft,
    /// Step theta up.
    RotateRight,
    /// Step phi up.
    RotateUp,
    /// Step phi down.
    RotateDown,
    /// Return to the initial pose.
    ResetCamera,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`CameraCommand`].
    fn to_command(self) -> CameraCommand {
        match self {
            Self::IncreaseRadius => CameraCommand::IncreaseRadius,
            Self::DecreaseRadius => CameraCommand::DecreaseRadius,
            Self::RotateLeft => CameraCommand::RotateLeft,
            Self::RotateRight => CameraCommand::RotateRight,
            Self::RotateUp => CameraCommand::RotateUp,
            Self::RotateDown => CameraCommand::RotateDown,
            Self::ResetCamera => CameraCommand::Reset,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyQ".into(), KeyCommandTag::IncreaseRadius),
            ("KeyE".into(), KeyCommandTag::DecreaseRadius),
            ("KeyA".into(), KeyCommandTag::RotateLeft),
            ("KeyD".into(), KeyCommandTag::RotateRight),
            ("KeyW".into(), KeyCommandTag::RotateUp),
            ("KeyS".into(), KeyCommandTag::RotateDown),
            ("KeyR".into(), KeyCommandTag::ResetCamera),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Bindings with no keys mapped.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<CameraCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, returning the tag it replaced.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) -> Option<KeyCommandTag> {
        self.bindings.insert(key.into(), tag)
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: &str) -> Option<KeyCommandTag> {
        self.bindings.remove(key)
    }

    /// Number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no key is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`SceneCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     scene.execute(cmd)?;
/// }
/// ```
pub struct InputProcessor {
    /// Cursor tracking and drag state.
    drag: DragState,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
    /// Degrees of rotation for a drag across the full viewport width.
    drag_degrees: f64,
    /// Current viewport width in physical pixels.
    viewport_width: u32,
}

impl InputProcessor {
    /// Create a processor with default key bindings, a 500 px viewport,
    /// and 180° of rotation per viewport-wide drag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            drag: DragState::new(),
            key_bindings: KeyBindings::default(),
            drag_degrees: 180.0,
            viewport_width: 500,
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Set the rotation produced by dragging across the whole viewport.
    #[must_use]
    pub fn with_drag_degrees(mut self, degrees: f64) -> Self {
        self.drag_degrees = degrees;
        self
    }

    /// Set the viewport width used to scale drags.
    #[must_use]
    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.viewport_width = width.max(1);
        self
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Whether a camera drag is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.drag.dragging
    }

    /// Degrees of rotation per pixel of drag.
    #[must_use]
    pub fn drag_factor(&self) -> f64 {
        self.drag_degrees / f64::from(self.viewport_width)
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<CameraCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<SceneCommand> {
        match event {
            InputEvent::Key { code } => {
                let command = self.handle_key_press(&code);
                if command.is_none() {
                    log::trace!("unbound key {code}");
                }
                command.map(SceneCommand::Camera)
            }
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    if pressed {
                        self.drag.press();
                    } else {
                        self.drag.release();
                    }
                }
                None
            }
            InputEvent::Resized { width, height } => {
                if width > 0 {
                    self.viewport_width = width;
                }
                Some(SceneCommand::Resize { width, height })
            }
        }
    }

    /// Cursor moved: while dragging, turn the pixel delta into an orbit.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<SceneCommand> {
        let (dx, dy) = self.drag.moved_to(x, y)?;
        if !self.drag.dragging || (dx == 0.0 && dy == 0.0) {
            return None;
        }
        let factor = self.drag_factor();
        Some(SceneCommand::Camera(CameraCommand::Orbit {
            d_theta: f64::from(dx) * factor,
            d_phi: -f64::from(dy) * factor,
        }))
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
