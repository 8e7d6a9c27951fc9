use glam::DVec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraPose, OrbitConfig, PhiPolicy, RadiusPolicy, StepSizes};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera pose, step sizes, and movement limits.
pub struct CameraOptions {
    /// Initial distance of the eye from the origin.
    #[schemars(title = "Radius", range(min = 0.1, max = 100.0), extend("step" = 0.5))]
    pub radius: f64,
    /// Initial azimuth in degrees.
    #[schemars(title = "Theta", range(min = 0.0, max = 360.0), extend("step" = 1.0))]
    pub theta: f64,
    /// Initial polar angle from +Y in degrees.
    #[schemars(title = "Phi", range(min = 0.0, max = 360.0), extend("step" = 1.0))]
    pub phi: f64,
    /// Look-at target.
    #[schemars(skip)]
    pub target: [f64; 3],
    /// Increments applied per key press.
    #[schemars(title = "Steps")]
    pub steps: StepSizes,
    /// Smallest allowed radius.
    #[schemars(title = "Min Radius", range(min = 0.1, max = 100.0))]
    pub min_radius: f64,
    /// Largest allowed radius.
    #[schemars(title = "Max Radius", range(min = 0.1, max = 100.0))]
    pub max_radius: f64,
    /// Behavior of phi at its limits.
    #[schemars(title = "Phi Policy")]
    pub phi_policy: PhiPolicy,
}

impl Default for CameraOptions {
    fn default() -> Self {
        let pose = CameraPose::default();
        let config = OrbitConfig::default();
        Self {
            radius: pose.radius,
            theta: pose.theta,
            phi: pose.phi,
            target: pose.target.to_array(),
            steps: config.steps,
            min_radius: config.radius.min,
            max_radius: config.radius.max,
            phi_policy: config.phi_policy,
        }
    }
}

impl CameraOptions {
    /// Initial pose described by these options.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            radius: self.radius,
            theta: self.theta,
            phi: self.phi,
            target: DVec3::from_array(self.target),
        }
    }

    /// Constraints described by these options.
    #[must_use]
    pub fn config(&self) -> OrbitConfig {
        OrbitConfig {
            steps: self.steps,
            radius: RadiusPolicy {
                min: self.min_radius,
                max: self.max_radius,
            },
            phi_policy: self.phi_policy,
        }
    }
}
