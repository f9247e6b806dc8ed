use crate::math::{Mat4, Vec3};
use crate::traits::ViewSource;

/// Per-frame camera data for a GPU uniform buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: Mat4,
    pub projection: Mat4,
    pub eye_position: Vec3,
    pub _pad1: f32,
    pub light_direction: Vec3,
    pub _pad2: f32,
}

impl CameraUniform {
    pub fn new(view: &impl ViewSource, projection: &Mat4, light_direction: Vec3) -> Self {
        Self {
            view: *view.view_matrix(),
            projection: *projection,
            eye_position: view.position(),
            _pad1: 0.0,
            light_direction,
            _pad2: 0.0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
