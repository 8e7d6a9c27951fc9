//! The complete interactive vocabulary.
//!
//! Every camera-affecting operation, whether triggered by a key press, a
//! mouse drag, or a programmatic call, is represented as a command. The
//! camera never sees raw input events.

use glam::DVec3;

/// An operation on an [`OrbitCamera`](crate::camera::OrbitCamera).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Move the eye one radius step outward.
    IncreaseRadius,
    /// Move the eye one radius step inward.
    DecreaseRadius,
    /// Decrease theta by one step.
    RotateLeft,
    /// Increase theta by one step.
    RotateRight,
    /// Increase phi by one step.
    RotateUp,
    /// Decrease phi by one step.
    RotateDown,
    /// Rotate by arbitrary angles, in degrees.
    Orbit {
        /// Azimuth delta.
        d_theta: f64,
        /// Polar delta.
        d_phi: f64,
    },
    /// Look at a new point.
    SetTarget {
        /// New look-at point.
        target: DVec3,
    },
    /// Jump to a spherical position.
    SetPosition {
        /// New radius.
        radius: f64,
        /// New azimuth in degrees.
        theta: f64,
        /// New polar angle in degrees.
        phi: f64,
    },
    /// Return to the initial pose.
    Reset,
}

/// An operation on a [`Scene`](crate::scene::Scene).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    /// Forward to the scene's camera.
    Camera(CameraCommand),
    /// The viewport changed size; update the projection aspect.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

impl From<CameraCommand> for SceneCommand {
    fn from(command: CameraCommand) -> Self {
        Self::Camera(command)
    }
}
