//! Spherical orbit camera.
//!
//! The camera stores `(radius, theta, phi, target)` and re-derives the eye
//! position and view matrix from scratch after every accepted mutation. A
//! mutation that would make the view degenerate is rejected and the
//! previous state is kept, so the cached matrix never contains NaNs.

use glam::{DMat4, DVec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::spherical::{spherical_to_cartesian, wrap_degrees};
use crate::command::CameraCommand;
use crate::error::OrbitError;
use crate::options::CameraOptions;

/// Eye-to-target distances below this are treated as zero.
const MIN_VIEW_LENGTH: f64 = 1e-6;
/// Sine of the angle between view direction and up below which the view
/// basis is considered degenerate.
const MIN_UP_SINE: f64 = 1e-6;

/// Sign of a discrete step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Add the step.
    Increase,
    /// Subtract the step.
    Decrease,
}

impl Direction {
    /// `1.0` or `-1.0`.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Increase => 1.0,
            Self::Decrease => -1.0,
        }
    }
}

/// How the polar angle behaves at its limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum PhiPolicy {
    /// Steps that would leave `[min, max]` are ignored; drags saturate.
    Clamp {
        /// Smallest allowed polar angle in degrees.
        min: f64,
        /// Largest allowed polar angle in degrees.
        max: f64,
    },
    /// Phi wraps modulo 360. Past 180 the eye continues over the pole and
    /// the image appears flipped because `up` stays at +Y.
    Wrap,
}

impl Default for PhiPolicy {
    fn default() -> Self {
        Self::Clamp {
            min: 1.0,
            max: 179.0,
        }
    }
}

/// Fixed increments applied by the discrete step commands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StepSizes {
    /// Radius increment per step.
    pub radius: f64,
    /// Azimuth increment per step in degrees.
    pub theta: f64,
    /// Polar increment per step in degrees.
    pub phi: f64,
}

impl Default for StepSizes {
    fn default() -> Self {
        Self {
            radius: 0.5,
            theta: 6.0,
            phi: 6.0,
        }
    }
}

/// Allowed radius range. Steps that would leave it are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusPolicy {
    /// Smallest allowed radius.
    pub min: f64,
    /// Largest allowed radius.
    pub max: f64,
}

impl Default for RadiusPolicy {
    fn default() -> Self {
        Self { min: 1.0, max: 10.0 }
    }
}

impl RadiusPolicy {
    /// Require `0 < min <= max < inf`.
    pub fn validate(&self) -> Result<(), OrbitError> {
        let ok = self.min > 0.0 && self.max.is_finite() && self.min <= self.max;
        if !ok {
            return Err(OrbitError::InvalidConfig(format!(
                "radius bounds must satisfy 0 < min <= max < inf, got [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Whether `radius` lies in `[min, max]`. False for NaN.
    #[must_use]
    pub fn contains(&self, radius: f64) -> bool {
        (self.min..=self.max).contains(&radius)
    }

    /// Pull `radius` into `[min, max]`. NaN stays NaN.
    #[must_use]
    pub fn clamp(&self, radius: f64) -> f64 {
        radius.clamp(self.min, self.max)
    }
}

/// Constraints applied to every camera mutation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitConfig {
    /// Step increments.
    pub steps: StepSizes,
    /// Radius range.
    pub radius: RadiusPolicy,
    /// Polar-angle policy.
    pub phi_policy: PhiPolicy,
}

impl OrbitConfig {
    /// Reject step sizes and bounds that cannot produce a usable camera.
    pub fn validate(&self) -> Result<(), OrbitError> {
        let StepSizes { radius, theta, phi } = self.steps;
        let steps_ok = radius > 0.0 && theta > 0.0 && phi > 0.0;
        if !steps_ok {
            return Err(OrbitError::InvalidConfig(format!(
                "step sizes must be positive, got radius={radius} \
                 theta={theta} phi={phi}"
            )));
        }
        self.radius.validate()?;
        if let PhiPolicy::Clamp { min, max } = self.phi_policy {
            let phi_ok = (0.0..=180.0).contains(&min)
                && (0.0..=180.0).contains(&max)
                && min <= max;
            if !phi_ok {
                return Err(OrbitError::InvalidConfig(format!(
                    "phi clamp must lie in [0, 180] with min <= max, got \
                     [{min}, {max}]"
                )));
            }
        }
        Ok(())
    }
}

/// The mutable part of the camera: where it sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Distance parameter of the eye.
    pub radius: f64,
    /// Azimuth in degrees, in `[0, 360)`.
    pub theta: f64,
    /// Polar angle from +Y in degrees.
    pub phi: f64,
    /// Look-at point.
    pub target: DVec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            radius: 5.0,
            theta: 33.0,
            phi: 60.0,
            target: DVec3::ZERO,
        }
    }
}

/// Build a right-handed view matrix, failing instead of producing NaNs.
pub fn look_at(eye: DVec3, target: DVec3, up: DVec3) -> Result<DMat4, OrbitError> {
    let dir = target - eye;
    let length = dir.length();
    // Also catches finite inputs far enough apart to overflow.
    if !(eye.is_finite() && target.is_finite() && length.is_finite()) {
        return Err(OrbitError::NonFiniteView { eye, target });
    }
    if length < MIN_VIEW_LENGTH {
        return Err(OrbitError::ZeroLengthView { eye });
    }
    let Some(up) = up.try_normalize() else {
        return Err(OrbitError::DegenerateView { eye, target });
    };
    if (dir / length).cross(up).length() < MIN_UP_SINE {
        return Err(OrbitError::DegenerateView { eye, target });
    }
    Ok(DMat4::look_at_rh(eye, target, up))
}

/// Camera orbiting the origin on a sphere, looking at a target.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pose: CameraPose,
    defaults: CameraPose,
    config: OrbitConfig,
    up: DVec3,
    eye: DVec3,
    view: DMat4,
}

impl OrbitCamera {
    /// Create a camera at `pose`. Fails on invalid configuration, a radius
    /// or phi outside the configured limits, or a degenerate initial view.
    pub fn new(pose: CameraPose, config: OrbitConfig) -> Result<Self, OrbitError> {
        config.validate()?;
        if !config.radius.contains(pose.radius) {
            return Err(OrbitError::InvalidConfig(format!(
                "initial radius {} outside [{}, {}]",
                pose.radius, config.radius.min, config.radius.max
            )));
        }
        if let PhiPolicy::Clamp { min, max } = config.phi_policy {
            if !(min..=max).contains(&pose.phi) {
                return Err(OrbitError::InvalidConfig(format!(
                    "initial phi {} outside [{min}, {max}]",
                    pose.phi
                )));
            }
        }

        let pose = CameraPose {
            theta: wrap_degrees(pose.theta),
            phi: match config.phi_policy {
                PhiPolicy::Wrap => wrap_degrees(pose.phi),
                PhiPolicy::Clamp { .. } => pose.phi,
            },
            ..pose
        };
        let up = DVec3::Y;
        let eye = spherical_to_cartesian(pose.radius, pose.theta, pose.phi);
        let view = look_at(eye, pose.target, up)?;

        Ok(Self {
            pose,
            defaults: pose,
            config,
            up,
            eye,
            view,
        })
    }

    /// Create a camera from the `[camera]` options section.
    pub fn from_options(options: &CameraOptions) -> Result<Self, OrbitError> {
        Self::new(options.pose(), options.config())
    }

    /// Current radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.pose.radius
    }

    /// Current azimuth in degrees.
    #[must_use]
    pub fn theta(&self) -> f64 {
        self.pose.theta
    }

    /// Current polar angle in degrees.
    #[must_use]
    pub fn phi(&self) -> f64 {
        self.pose.phi
    }

    /// Current look-at target.
    #[must_use]
    pub fn target(&self) -> DVec3 {
        self.pose.target
    }

    /// Full current pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Eye position derived from the current pose.
    #[must_use]
    pub fn eye(&self) -> DVec3 {
        self.eye
    }

    /// Up vector, always +Y.
    #[must_use]
    pub fn up(&self) -> DVec3 {
        self.up
    }

    /// Active constraints.
    #[must_use]
    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// The view matrix as of the last accepted mutation.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        self.view
    }

    /// Execute a camera command. Returns `Ok(true)` if the pose changed and
    /// `Ok(false)` if a limit turned the command into a no-op.
    pub fn apply(&mut self, command: CameraCommand) -> Result<bool, OrbitError> {
        match command {
            CameraCommand::IncreaseRadius => self.increase_radius(),
            CameraCommand::DecreaseRadius => self.decrease_radius(),
            CameraCommand::RotateLeft => self.rotate_theta(Direction::Decrease),
            CameraCommand::RotateRight => self.rotate_theta(Direction::Increase),
            CameraCommand::RotateUp => self.rotate_phi(Direction::Increase),
            CameraCommand::RotateDown => self.rotate_phi(Direction::Decrease),
            CameraCommand::Orbit { d_theta, d_phi } => self.orbit(d_theta, d_phi),
            CameraCommand::SetTarget { target } => {
                self.set_target(target).map(|()| true)
            }
            CameraCommand::SetPosition { radius, theta, phi } => {
                self.set_position(radius, theta, phi).map(|()| true)
            }
            CameraCommand::Reset => self.reset().map(|()| true),
        }
    }

    /// Move the eye one step away from the origin.
    pub fn increase_radius(&mut self) -> Result<bool, OrbitError> {
        self.step_radius(Direction::Increase)
    }

    /// Move the eye one step towards the origin.
    pub fn decrease_radius(&mut self) -> Result<bool, OrbitError> {
        self.step_radius(Direction::Decrease)
    }

    fn step_radius(&mut self, direction: Direction) -> Result<bool, OrbitError> {
        let radius = self.pose.radius + direction.sign() * self.config.steps.radius;
        if !self.config.radius.contains(radius) {
            return Ok(false);
        }
        self.commit(CameraPose { radius, ..self.pose })?;
        Ok(true)
    }

    /// Step the azimuth, wrapping into `[0, 360)`.
    pub fn rotate_theta(&mut self, direction: Direction) -> Result<bool, OrbitError> {
        let theta = wrap_degrees(self.pose.theta + direction.sign() * self.config.steps.theta);
        self.commit(CameraPose { theta, ..self.pose })?;
        Ok(true)
    }

    /// Step the polar angle under the configured [`PhiPolicy`].
    pub fn rotate_phi(&mut self, direction: Direction) -> Result<bool, OrbitError> {
        let raw = self.pose.phi + direction.sign() * self.config.steps.phi;
        let phi = match self.config.phi_policy {
            PhiPolicy::Wrap => wrap_degrees(raw),
            PhiPolicy::Clamp { min, max } => {
                if !(min..=max).contains(&raw) {
                    return Ok(false);
                }
                raw
            }
        };
        self.commit(CameraPose { phi, ..self.pose })?;
        Ok(true)
    }

    /// Rotate by arbitrary angle deltas (degrees), as produced by a mouse
    /// drag. Theta wraps; phi wraps or saturates at the clamp bounds.
    pub fn orbit(&mut self, d_theta: f64, d_phi: f64) -> Result<bool, OrbitError> {
        let theta = wrap_degrees(self.pose.theta + d_theta);
        let phi = match self.config.phi_policy {
            PhiPolicy::Wrap => wrap_degrees(self.pose.phi + d_phi),
            PhiPolicy::Clamp { min, max } => (self.pose.phi + d_phi).clamp(min, max),
        };
        if theta == self.pose.theta && phi == self.pose.phi {
            return Ok(false);
        }
        self.commit(CameraPose {
            theta,
            phi,
            ..self.pose
        })?;
        Ok(true)
    }

    /// Look at a new point.
    pub fn set_target(&mut self, target: DVec3) -> Result<(), OrbitError> {
        self.commit(CameraPose { target, ..self.pose })
    }

    /// Jump to a new spherical position. The radius is clamped into the
    /// configured bounds, theta is wrapped, and phi is wrapped or clamped
    /// according to the policy. Non-finite input is rejected.
    pub fn set_position(&mut self, radius: f64, theta: f64, phi: f64) -> Result<(), OrbitError> {
        let radius = self.config.radius.clamp(radius);
        let phi = match self.config.phi_policy {
            PhiPolicy::Wrap => wrap_degrees(phi),
            PhiPolicy::Clamp { min, max } => phi.clamp(min, max),
        };
        self.commit(CameraPose {
            radius,
            theta: wrap_degrees(theta),
            phi,
            target: self.pose.target,
        })
    }

    /// Restore the pose the camera was created with.
    pub fn reset(&mut self) -> Result<(), OrbitError> {
        self.commit(self.defaults)
    }

    /// Derive eye and view for `next`; only on success replace the state.
    fn commit(&mut self, next: CameraPose) -> Result<(), OrbitError> {
        let eye = spherical_to_cartesian(next.radius, next.theta, next.phi);
        let view = look_at(eye, next.target, self.up)?;
        self.pose = next;
        self.eye = eye;
        self.view = view;
        log::debug!(
            "camera pose r={} θ={} φ={} target={}",
            next.radius,
            next.theta,
            next.phi,
            next.target
        );
        Ok(())
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        let pose = CameraPose::default();
        let up = DVec3::Y;
        let eye = spherical_to_cartesian(pose.radius, pose.theta, pose.phi);
        Self {
            pose,
            defaults: pose,
            config: OrbitConfig::default(),
            up,
            eye,
            view: DMat4::look_at_rh(eye, pose.target, up),
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec4;

    use super::*;

    fn wrap_config() -> OrbitConfig {
        OrbitConfig {
            phi_policy: PhiPolicy::Wrap,
            ..OrbitConfig::default()
        }
    }

    #[test]
    fn default_pose_looks_at_origin_along_negative_z() {
        let camera = OrbitCamera::new(CameraPose::default(), OrbitConfig::default()).unwrap();
        let eye = camera.eye();
        assert!((eye.x - 3.630).abs() < 2e-3);
        assert!((eye.y - 2.5).abs() < 1e-9);
        assert!((eye.z - 2.357).abs() < 2e-3);

        let in_eye = camera.view_matrix() * DVec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(in_eye.x.abs() < 1e-9);
        assert!(in_eye.y.abs() < 1e-9);
        assert!((in_eye.z + 5.0).abs() < 1e-9);
    }

    #[test]
    fn default_impl_matches_validated_constructor() {
        let built = OrbitCamera::new(CameraPose::default(), OrbitConfig::default()).unwrap();
        let default = OrbitCamera::default();
        assert_eq!(built.view_matrix(), default.view_matrix());
        assert_eq!(built.pose(), default.pose());
    }

    #[test]
    fn sixty_theta_steps_return_to_start() {
        let mut camera = OrbitCamera::default();
        let start = camera.theta();
        for _ in 0..60 {
            assert!(camera.rotate_theta(Direction::Increase).unwrap());
        }
        assert_eq!(camera.theta(), start);
        for _ in 0..60 {
            assert!(camera.rotate_theta(Direction::Decrease).unwrap());
        }
        assert_eq!(camera.theta(), start);
    }

    #[test]
    fn theta_wraps_below_zero() {
        let pose = CameraPose {
            theta: 0.0,
            ..CameraPose::default()
        };
        let mut camera = OrbitCamera::new(pose, OrbitConfig::default()).unwrap();
        assert!(camera.apply(CameraCommand::RotateLeft).unwrap());
        assert_eq!(camera.theta(), 354.0);
    }

    #[test]
    fn radius_steps_are_an_inverse_pair() {
        let mut camera = OrbitCamera::default();
        let start = camera.radius();
        assert!(camera.increase_radius().unwrap());
        assert!(camera.decrease_radius().unwrap());
        assert_eq!(camera.radius(), start);
    }

    #[test]
    fn radius_stops_at_bounds() {
        let mut camera = OrbitCamera::default();
        for _ in 0..10 {
            assert!(camera.increase_radius().unwrap());
        }
        assert_eq!(camera.radius(), 10.0);
        let view = camera.view_matrix();
        assert!(!camera.increase_radius().unwrap());
        assert_eq!(camera.radius(), 10.0);
        assert_eq!(camera.view_matrix(), view);

        for _ in 0..18 {
            assert!(camera.decrease_radius().unwrap());
        }
        assert_eq!(camera.radius(), 1.0);
        assert!(!camera.decrease_radius().unwrap());
        assert_eq!(camera.radius(), 1.0);
    }

    #[test]
    fn phi_clamp_ignores_steps_past_limits() {
        let mut camera = OrbitCamera::default();
        let mut applied = 0;
        while camera.rotate_phi(Direction::Increase).unwrap() {
            applied += 1;
        }
        assert_eq!(applied, 19);
        assert_eq!(camera.phi(), 174.0);

        while camera.rotate_phi(Direction::Decrease).unwrap() {}
        assert_eq!(camera.phi(), 6.0);
    }

    #[test]
    fn phi_wrap_crosses_zero_exactly() {
        let pose = CameraPose {
            phi: 354.0,
            target: DVec3::new(1.0, 0.0, 0.0),
            ..CameraPose::default()
        };
        let mut camera = OrbitCamera::new(pose, wrap_config()).unwrap();
        assert!(camera.apply(CameraCommand::RotateUp).unwrap());
        assert_eq!(camera.phi(), 0.0);
    }

    #[test]
    fn degenerate_step_is_rejected_and_state_kept() {
        let pose = CameraPose {
            phi: 174.0,
            ..CameraPose::default()
        };
        let mut camera = OrbitCamera::new(pose, wrap_config()).unwrap();
        let before = camera.clone();

        let err = camera.rotate_phi(Direction::Increase).unwrap_err();
        assert!(matches!(err, OrbitError::DegenerateView { .. }));
        assert_eq!(camera.pose(), before.pose());
        assert_eq!(camera.view_matrix(), before.view_matrix());
    }

    #[test]
    fn target_on_eye_is_rejected() {
        let mut camera = OrbitCamera::default();
        let eye = camera.eye();
        let err = camera.set_target(eye).unwrap_err();
        assert!(matches!(err, OrbitError::ZeroLengthView { .. }));
        assert!(err.is_degenerate());
        assert_eq!(camera.target(), DVec3::ZERO);
    }

    #[test]
    fn set_target_is_idempotent() {
        let mut camera = OrbitCamera::default();
        let target = DVec3::new(0.0, 0.5, 0.0);
        camera.set_target(target).unwrap();
        let first = camera.view_matrix();
        camera.set_target(target).unwrap();
        assert_eq!(camera.view_matrix(), first);
        assert_eq!(camera.view_matrix(), camera.view_matrix());
    }

    #[test]
    fn view_matrix_is_rederived_not_accumulated() {
        let mut stepped = OrbitCamera::default();
        assert!(stepped.rotate_theta(Direction::Increase).unwrap());
        assert!(stepped.rotate_phi(Direction::Decrease).unwrap());
        assert!(stepped.increase_radius().unwrap());

        let direct = OrbitCamera::new(
            CameraPose {
                radius: 5.5,
                theta: 39.0,
                phi: 54.0,
                target: DVec3::ZERO,
            },
            OrbitConfig::default(),
        )
        .unwrap();
        assert_eq!(stepped.view_matrix(), direct.view_matrix());
    }

    #[test]
    fn orbit_saturates_under_clamp() {
        let mut camera = OrbitCamera::default();
        assert!(camera.orbit(-90.0, 500.0).unwrap());
        assert_eq!(camera.theta(), 303.0);
        assert_eq!(camera.phi(), 179.0);
        assert!(!camera.orbit(0.0, 10.0).unwrap());
    }

    #[test]
    fn set_position_and_reset() {
        let mut camera = OrbitCamera::default();
        camera.set_position(3.5, 411.0, 60.0).unwrap();
        assert_eq!(camera.radius(), 3.5);
        assert_eq!(camera.theta(), 51.0);
        assert_eq!(camera.phi(), 60.0);

        camera.set_position(50.0, 0.0, 0.0).unwrap();
        assert_eq!(camera.radius(), 10.0);
        assert_eq!(camera.phi(), 1.0);

        camera.reset().unwrap();
        assert_eq!(camera.pose(), CameraPose::default());
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let bad_step = OrbitConfig {
            steps: StepSizes {
                radius: 0.0,
                ..StepSizes::default()
            },
            ..OrbitConfig::default()
        };
        assert!(OrbitCamera::new(CameraPose::default(), bad_step).is_err());

        let bad_bounds = OrbitConfig {
            radius: RadiusPolicy { min: 0.0, max: 10.0 },
            ..OrbitConfig::default()
        };
        assert!(OrbitCamera::new(CameraPose::default(), bad_bounds).is_err());

        let unbounded = OrbitConfig {
            radius: RadiusPolicy {
                min: 1.0,
                max: f64::INFINITY,
            },
            ..OrbitConfig::default()
        };
        assert!(OrbitCamera::new(CameraPose::default(), unbounded).is_err());

        let out_of_range = CameraPose {
            radius: 12.0,
            ..CameraPose::default()
        };
        assert!(matches!(
            OrbitCamera::new(out_of_range, OrbitConfig::default()),
            Err(OrbitError::InvalidConfig(_))
        ));

        let pole = CameraPose {
            phi: 0.0,
            ..CameraPose::default()
        };
        assert!(matches!(
            OrbitCamera::new(pole, wrap_config()),
            Err(OrbitError::DegenerateView { .. })
        ));
    }

    #[test]
    fn non_finite_target_is_rejected() {
        let mut camera = OrbitCamera::default();
        let before = camera.clone();
        let err = camera
            .set_target(DVec3::new(f64::INFINITY, 0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, OrbitError::NonFiniteView { .. }));
        assert!(err.is_degenerate());
        assert_eq!(camera.pose(), before.pose());
        assert!(camera.view_matrix().is_finite());

        assert!(camera.set_target(DVec3::new(0.0, f64::NAN, 0.0)).is_err());
        assert_eq!(camera.target(), DVec3::ZERO);
    }

    #[test]
    fn non_finite_position_is_rejected() {
        let mut camera = OrbitCamera::default();
        for (radius, theta, phi) in [
            (f64::NAN, 33.0, 60.0),
            (5.0, f64::NAN, 60.0),
            (5.0, f64::INFINITY, 60.0),
            (5.0, 33.0, f64::NAN),
        ] {
            let err = camera.set_position(radius, theta, phi).unwrap_err();
            assert!(matches!(err, OrbitError::NonFiniteView { .. }));
        }
        assert_eq!(camera.pose(), CameraPose::default());
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn non_finite_orbit_is_rejected() {
        let mut camera = OrbitCamera::default();
        assert!(camera.orbit(f64::NAN, 0.0).is_err());
        assert!(camera.orbit(0.0, f64::NAN).is_err());
        assert!(camera
            .apply(CameraCommand::Orbit {
                d_theta: f64::INFINITY,
                d_phi: 0.0,
            })
            .is_err());
        assert_eq!(camera.pose(), CameraPose::default());
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn look_at_rejects_bad_inputs() {
        let huge = DVec3::splat(f64::MAX);
        assert!(matches!(
            look_at(huge, -huge, DVec3::Y),
            Err(OrbitError::NonFiniteView { .. })
        ));
        assert!(matches!(
            look_at(DVec3::ONE, DVec3::ZERO, DVec3::ZERO),
            Err(OrbitError::DegenerateView { .. })
        ));
        assert!(look_at(DVec3::ONE, DVec3::ZERO, DVec3::Y).is_ok());
    }

    #[test]
    fn from_options_uses_camera_section() {
        let options = CameraOptions {
            radius: 7.5,
            min_radius: 2.0,
            max_radius: 8.0,
            ..CameraOptions::default()
        };
        let mut camera = OrbitCamera::from_options(&options).unwrap();
        assert_eq!(camera.radius(), 7.5);
        assert_eq!(camera.config().radius, RadiusPolicy { min: 2.0, max: 8.0 });
        assert!(camera.increase_radius().unwrap());
        assert!(!camera.increase_radius().unwrap());

        let bad = CameraOptions {
            radius: 9.0,
            ..options
        };
        assert!(matches!(
            OrbitCamera::from_options(&bad),
            Err(OrbitError::InvalidConfig(_))
        ));
    }
}
