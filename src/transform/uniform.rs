//! `#[repr(C)]` uniform block uploaded once per camera change.

use glam::{DMat3, DVec3, Mat4};

use super::FrameTransforms;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the composed matrices, the eye, and the
/// scene light. All matrices are column-major `f32`.
pub struct TransformUniform {
    /// World → eye.
    pub view: [[f32; 4]; 4],
    /// Object → eye.
    pub model_view: [[f32; 4]; 4],
    /// Object → clip.
    pub mvp: [[f32; 4]; 4],
    /// Normal matrix, each column padded to a `vec4` (std140 `mat3`).
    pub normal: [[f32; 4]; 3],
    /// Camera world-space position.
    pub eye: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad0: f32,
    /// Light world-space position.
    pub light_position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad1: f32,
    /// Light color, linear RGB.
    pub light_color: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad2: f32,
}

impl Default for TransformUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformUniform {
    /// Identity matrices, eye at the origin, white light at the origin.
    #[must_use]
    pub fn new() -> Self {
        let identity = Mat4::IDENTITY.to_cols_array_2d();
        Self {
            view: identity,
            model_view: identity,
            mvp: identity,
            normal: [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]],
            eye: [0.0; 3],
            _pad0: 0.0,
            light_position: [0.0; 3],
            _pad1: 0.0,
            light_color: [1.0; 3],
            _pad2: 0.0,
        }
    }

    /// Update the matrix and eye fields from freshly composed transforms.
    pub fn update(&mut self, transforms: &FrameTransforms, eye: DVec3) {
        self.view = transforms.view.as_mat4().to_cols_array_2d();
        self.model_view = transforms.model_view.as_mat4().to_cols_array_2d();
        self.mvp = transforms.mvp.as_mat4().to_cols_array_2d();
        self.normal = pad_mat3(&transforms.normal);
        self.eye = eye.as_vec3().to_array();
    }

    /// Update the light fields.
    pub fn set_light(&mut self, position: DVec3, color: [f32; 3]) {
        self.light_position = position.as_vec3().to_array();
        self.light_color = color;
    }

    /// Normal matrix as nine tightly packed floats, the layout expected by
    /// `uniformMatrix3fv`.
    #[must_use]
    pub fn normal_packed(&self) -> [f32; 9] {
        let [a, b, c] = self.normal;
        [a[0], a[1], a[2], b[0], b[1], b[2], c[0], c[1], c[2]]
    }

    /// Raw bytes for upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

fn pad_mat3(m: &DMat3) -> [[f32; 4]; 3] {
    let cols = m.as_mat3().to_cols_array_2d();
    [
        [cols[0][0], cols[0][1], cols[0][2], 0.0],
        [cols[1][0], cols[1][1], cols[1][2], 0.0],
        [cols[2][0], cols[2][1], cols[2][2], 0.0],
    ]
}
