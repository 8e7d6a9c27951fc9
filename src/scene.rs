//! The single owner of camera state and the transforms derived from it.
//!
//! A [`Scene`] holds one [`OrbitCamera`], the projection, the model matrix
//! of the object being viewed, and the point light. Every camera-affecting
//! command recomposes [`FrameTransforms`] synchronously, so a renderer only
//! ever reads the cached result.
//!
//! ```ignore
//! let (mut scene, mut input) = Scene::builder()
//!     .options(Options::load(path)?)
//!     .input(InputProcessor::new())
//!     .build()?;
//!
//! if let Some(cmd) = input.handle_event(event) {
//!     if scene.execute(cmd)? {
//!         upload(scene.uniform().as_bytes());
//!     }
//! }
//! ```

use glam::{DMat4, DVec3};

use crate::camera::{OrbitCamera, Projection};
use crate::command::{CameraCommand, SceneCommand};
use crate::error::OrbitError;
use crate::input::InputProcessor;
use crate::light::PointLight;
use crate::options::Options;
use crate::transform::{FrameTransforms, TransformUniform, Turntable};

/// Camera, projection, model, and light, plus their composed transforms.
pub struct Scene {
    camera: OrbitCamera,
    projection: Projection,
    model: DMat4,
    light: PointLight,
    transforms: FrameTransforms,
    uniform: TransformUniform,
}

/// Builds a [`Scene`] together with the input processor that drives it.
#[derive(Default)]
pub struct SceneBuilder {
    options: Options,
    model: Option<DMat4>,
    input: Option<InputProcessor>,
}

impl SceneBuilder {
    /// Use these options for camera, projection, and light.
    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Initial model matrix (identity if not set).
    #[must_use]
    pub fn model(mut self, model: DMat4) -> Self {
        self.model = Some(model);
        self
    }

    /// Wire the input processor that will feed commands to the scene.
    #[must_use]
    pub fn input(mut self, input: InputProcessor) -> Self {
        self.input = Some(input);
        self
    }

    /// Wire an input processor configured from the builder's options.
    #[must_use]
    pub fn input_from_options(self) -> Self {
        let input = self.options.input_processor();
        self.input(input)
    }

    /// Validate the configuration and build the scene.
    ///
    /// Fails with [`OrbitError::InputNotWired`] if no input processor was
    /// supplied, and with the camera/projection errors if the options
    /// describe an unusable initial state.
    pub fn build(self) -> Result<(Scene, InputProcessor), OrbitError> {
        let input = self.input.ok_or(OrbitError::InputNotWired)?;
        self.options.validate()?;

        let camera = OrbitCamera::from_options(&self.options.camera)?;
        let projection = self.options.projection.projection();
        let model = self.model.unwrap_or(DMat4::IDENTITY);
        let light = PointLight::from_options(&self.options.light);

        let transforms = FrameTransforms::compose(model, camera.view_matrix(), projection.matrix())?;
        let mut uniform = TransformUniform::new();
        uniform.update(&transforms, camera.eye());
        uniform.set_light(light.world_position(), light.color);

        log::debug!(
            "scene built: eye={} target={} fovy={}",
            camera.eye(),
            camera.target(),
            projection.fovy
        );

        Ok((
            Scene {
                camera,
                projection,
                model,
                light,
                transforms,
                uniform,
            },
            input,
        ))
    }
}

impl Scene {
    /// Start building a scene.
    #[must_use]
    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    /// Execute a command. Returns `Ok(true)` when the transforms changed
    /// and should be re-uploaded.
    ///
    /// A camera command that would produce a degenerate view is rejected:
    /// the error is returned and camera and transforms keep their previous
    /// values.
    pub fn execute(&mut self, command: SceneCommand) -> Result<bool, OrbitError> {
        match command {
            SceneCommand::Camera(cmd) => self.execute_camera(cmd),
            SceneCommand::Resize { width, height } => {
                if !self.projection.resize(width, height) {
                    log::debug!("ignoring resize to {width}x{height}");
                    return Ok(false);
                }
                self.recompose()?;
                Ok(true)
            }
        }
    }

    fn execute_camera(&mut self, command: CameraCommand) -> Result<bool, OrbitError> {
        match self.camera.apply(command) {
            Ok(true) => {
                self.recompose()?;
                Ok(true)
            }
            Ok(false) => {
                log::debug!("{command:?} hit a camera limit");
                Ok(false)
            }
            Err(e) => {
                log::warn!("rejected {command:?}: {e}");
                Err(e)
            }
        }
    }

    /// Replace the model matrix. On a singular model the previous model
    /// and transforms are kept.
    pub fn set_model(&mut self, model: DMat4) -> Result<(), OrbitError> {
        let transforms =
            FrameTransforms::compose(model, self.camera.view_matrix(), self.projection.matrix())?;
        self.model = model;
        self.install(transforms);
        Ok(())
    }

    /// Drive the model matrix from a turntable at its current instant.
    pub fn spin(&mut self, turntable: &Turntable) -> Result<(), OrbitError> {
        self.set_model(turntable.model_now())
    }

    /// Replace the projection. Invalid parameters are rejected.
    pub fn set_projection(&mut self, projection: Projection) -> Result<(), OrbitError> {
        projection.validate()?;
        let transforms =
            FrameTransforms::compose(self.model, self.camera.view_matrix(), projection.matrix())?;
        self.projection = projection;
        self.install(transforms);
        Ok(())
    }

    /// Move the light around the origin (degrees, both angles wrapping).
    pub fn orbit_light(&mut self, d_theta: f64, d_phi: f64) {
        self.light.orbit(d_theta, d_phi);
        self.uniform.set_light(self.light.world_position(), self.light.color);
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Current projection.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Current light.
    #[must_use]
    pub fn light(&self) -> &PointLight {
        &self.light
    }

    /// Eye position.
    #[must_use]
    pub fn eye(&self) -> DVec3 {
        self.camera.eye()
    }

    /// Transforms as of the last change.
    #[must_use]
    pub fn transforms(&self) -> &FrameTransforms {
        &self.transforms
    }

    /// GPU-ready packing of [`Self::transforms`] plus eye and light.
    #[must_use]
    pub fn uniform(&self) -> &TransformUniform {
        &self.uniform
    }

    fn recompose(&mut self) -> Result<(), OrbitError> {
        let transforms =
            FrameTransforms::compose(self.model, self.camera.view_matrix(), self.projection.matrix())?;
        self.install(transforms);
        Ok(())
    }

    fn install(&mut self, transforms: FrameTransforms) {
        self.transforms = transforms;
        self.uniform.update(&self.transforms, self.camera.eye());
        log::debug!("transforms recomposed, eye={}", self.camera.eye());
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec4;

    use super::*;
    use crate::camera::PhiPolicy;
    use crate::input::InputEvent;

    fn scene() -> (Scene, InputProcessor) {
        Scene::builder().input(InputProcessor::new()).build().unwrap()
    }

    fn key(code: &str) -> InputEvent {
        InputEvent::Key { code: code.into() }
    }

    #[test]
    fn build_without_input_fails() {
        let err = Scene::builder().build().err().unwrap();
        assert!(matches!(err, OrbitError::InputNotWired));
    }

    #[test]
    fn build_rejects_invalid_options() {
        let mut options = Options::default();
        options.camera.radius = 0.5;
        let result = Scene::builder().options(options).input_from_options().build();
        assert!(matches!(result, Err(OrbitError::InvalidConfig(_))));
    }

    #[test]
    fn initial_transforms_match_camera() {
        let (scene, _) = scene();
        let t = scene.transforms();
        assert_eq!(t.view, scene.camera().view_matrix());
        assert_eq!(t.model, DMat4::IDENTITY);
        assert_eq!(t.mvp, scene.projection().matrix() * scene.camera().view_matrix());
    }

    #[test]
    fn key_press_recomposes_transforms() {
        let (mut scene, mut input) = scene();
        let before = *scene.transforms();

        let cmd = input.handle_event(key("KeyD")).unwrap();
        assert!(scene.execute(cmd).unwrap());
        assert_eq!(scene.camera().theta(), 39.0);
        assert_ne!(scene.transforms().view, before.view);
        assert_eq!(scene.transforms().view, scene.camera().view_matrix());

        let eye = scene.eye().as_vec3().to_array();
        assert_eq!(scene.uniform().eye, eye);
    }

    #[test]
    fn limit_hit_reports_no_change() {
        let mut options = Options::default();
        options.camera.radius = 10.0;
        let (mut scene, _) = Scene::builder()
            .options(options)
            .input_from_options()
            .build()
            .unwrap();
        let before = *scene.transforms();
        assert!(!scene.execute(CameraCommand::IncreaseRadius.into()).unwrap());
        assert_eq!(*scene.transforms(), before);
    }

    #[test]
    fn degenerate_command_leaves_scene_untouched() {
        let mut options = Options::default();
        options.camera.phi = 174.0;
        options.camera.phi_policy = PhiPolicy::Wrap;
        let (mut scene, _) = Scene::builder()
            .options(options)
            .input_from_options()
            .build()
            .unwrap();
        let before = *scene.transforms();

        let err = scene.execute(CameraCommand::RotateUp.into()).unwrap_err();
        assert!(err.is_degenerate());
        assert_eq!(*scene.transforms(), before);
        assert_eq!(scene.camera().phi(), 174.0);
    }

    #[test]
    fn non_finite_commands_leave_scene_untouched() {
        let (mut scene, _) = scene();
        let before = *scene.transforms();
        let uniform = *scene.uniform();

        let target = DVec3::new(f64::INFINITY, 0.0, 0.0);
        let err = scene
            .execute(CameraCommand::SetTarget { target }.into())
            .unwrap_err();
        assert!(err.is_degenerate());
        let err = scene
            .execute(
                CameraCommand::Orbit {
                    d_theta: f64::NAN,
                    d_phi: 0.0,
                }
                .into(),
            )
            .unwrap_err();
        assert!(err.is_degenerate());

        let nan_model = DMat4::from_scale(DVec3::splat(f64::NAN));
        assert!(matches!(
            scene.set_model(nan_model),
            Err(OrbitError::NonFiniteTransform)
        ));

        assert_eq!(*scene.transforms(), before);
        assert_eq!(*scene.uniform(), uniform);
    }

    #[test]
    fn resize_updates_projection_only() {
        let (mut scene, mut input) = scene();
        let view = scene.transforms().view;
        let cmd = input
            .handle_event(InputEvent::Resized {
                width: 1000,
                height: 500,
            })
            .unwrap();
        assert!(scene.execute(cmd).unwrap());
        assert_eq!(scene.projection().aspect, 2.0);
        assert_eq!(scene.transforms().view, view);

        assert!(!scene
            .execute(SceneCommand::Resize {
                width: 10,
                height: 0,
            })
            .unwrap());
    }

    #[test]
    fn target_maps_to_negative_z_in_eye_space() {
        let (mut scene, _) = scene();
        let target = DVec3::new(0.0, 0.5, 0.0);
        assert!(scene
            .execute(CameraCommand::SetTarget { target }.into())
            .unwrap());
        let in_eye = scene.transforms().model_view * target.extend(1.0);
        assert!(in_eye.x.abs() < 1e-9);
        assert!(in_eye.y.abs() < 1e-9);
        assert!(in_eye.z < 0.0);
        assert_eq!(in_eye.w, 1.0);
    }

    #[test]
    fn set_model_and_spin() {
        let (mut scene, _) = scene();
        let model = DMat4::from_translation(DVec3::new(0.0, 0.5, 0.0));
        scene.set_model(model).unwrap();
        assert_eq!(scene.transforms().model_view, scene.camera().view_matrix() * model);

        let singular = DMat4::from_scale(DVec3::ZERO);
        assert!(scene.set_model(singular).is_err());
        assert_eq!(scene.transforms().model, model);

        scene.spin(&Turntable::default()).unwrap();
        let origin = scene.transforms().model * DVec4::W;
        assert!(origin.truncate().length() < 1e-12);
    }

    #[test]
    fn set_projection_validates() {
        let (mut scene, _) = scene();
        let bad = Projection {
            zfar: 0.01,
            ..Projection::default()
        };
        assert!(scene.set_projection(bad).is_err());
        assert_eq!(scene.projection().zfar, 100.0);

        let wider = Projection {
            fovy: 60.0,
            ..Projection::default()
        };
        scene.set_projection(wider).unwrap();
        assert_eq!(scene.transforms().projection, wider.matrix());
    }

    #[test]
    fn light_orbit_updates_uniform() {
        let (mut scene, _) = scene();
        let before = scene.uniform().light_position;
        scene.orbit_light(5.0, 0.0);
        assert_ne!(scene.uniform().light_position, before);
        assert_eq!(scene.light().position.theta, 105.0);
    }
}
