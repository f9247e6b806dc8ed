use crate::math::{Mat4, Vec3};

/// Anything that can hand the render loop a view for the current frame.
pub trait ViewSource {
    /// World-to-camera transform, column-major
    fn view_matrix(&self) -> &Mat4;

    /// Eye position in world space
    fn position(&self) -> Vec3;

    /// Unit vector the eye is looking along
    fn view_direction(&self) -> Vec3;
}
