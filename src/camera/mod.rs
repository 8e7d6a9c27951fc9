//! Camera system.
//!
//! Provides a spherical orbit camera with discrete stepping, the spherical
//! coordinate helpers it is built on, and perspective projection.

/// Orbit camera state, policies, and step operations.
pub mod orbit;
/// Perspective projection parameters.
pub mod projection;
/// Spherical coordinate conversion and angle wrapping.
pub mod spherical;

pub use orbit::{
    look_at, CameraPose, Direction, OrbitCamera, OrbitConfig, PhiPolicy, RadiusPolicy, StepSizes,
};
pub use projection::{DepthRange, Projection};
pub use spherical::{spherical_to_cartesian, wrap_degrees, SphericalCoords};
