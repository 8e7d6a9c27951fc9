//! Per-frame transform composition.
//!
//! Model is applied first (object → world), then View (world → eye), then
//! Projection (eye → clip):
//!
//! ```text
//! ModelView    = View * Model
//! MVP          = Proj * ModelView
//! NormalMatrix = transpose(inverse(upper3x3(ModelView)))
//! ```

pub mod turntable;
pub mod uniform;

use glam::{DMat3, DMat4};

pub use turntable::Turntable;
pub use uniform::TransformUniform;

use crate::error::OrbitError;

/// Determinants with a smaller magnitude are treated as singular.
const SINGULAR_DETERMINANT: f64 = 1e-12;

/// The matrices a renderer uploads for one object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransforms {
    /// Object → world.
    pub model: DMat4,
    /// World → eye.
    pub view: DMat4,
    /// Eye → clip.
    pub projection: DMat4,
    /// `view * model`.
    pub model_view: DMat4,
    /// `projection * view * model`.
    pub mvp: DMat4,
    /// Inverse-transpose of the upper 3×3 of `model_view`.
    pub normal: DMat3,
}

impl FrameTransforms {
    /// Compose the three input matrices. Fails when any product has a NaN
    /// or infinite entry, or when the model-view has a singular linear part
    /// (normals cannot be transformed then).
    pub fn compose(model: DMat4, view: DMat4, projection: DMat4) -> Result<Self, OrbitError> {
        let model_view = view * model;
        let mvp = projection * model_view;
        if !(model_view.is_finite() && mvp.is_finite()) {
            return Err(OrbitError::NonFiniteTransform);
        }
        let normal = normal_matrix(&model_view)?;
        Ok(Self {
            model,
            view,
            projection,
            model_view,
            mvp,
            normal,
        })
    }
}

/// `transpose(inverse(upper3x3(model_view)))`.
pub fn normal_matrix(model_view: &DMat4) -> Result<DMat3, OrbitError> {
    let upper = DMat3::from_mat4(*model_view);
    if !upper.is_finite() {
        return Err(OrbitError::NonFiniteTransform);
    }
    let det = upper.determinant();
    if !det.is_finite() || det.abs() < SINGULAR_DETERMINANT {
        return Err(OrbitError::SingularModelView);
    }
    let normal = upper.inverse().transpose();
    if !normal.is_finite() {
        return Err(OrbitError::SingularModelView);
    }
    Ok(normal)
}
