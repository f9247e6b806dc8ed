use std::f32::consts::FRAC_PI_3;

use crate::math::{perspective, Mat4};

pub const DEFAULT_FOV_Y: f32 = FRAC_PI_3;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 100.0;

/// Perspective projection that follows the viewport's aspect ratio.
#[derive(Debug, Clone)]
pub struct Projection {
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    matrix: Mat4,
}

impl Projection {
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut matrix = [0.0; 16];
        perspective(&mut matrix, fov_y, aspect, near, far);
        Self {
            fov_y,
            aspect,
            near,
            far,
            matrix,
        }
    }

    /// Default lens for a `width` x `height` viewport.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        Self::new(DEFAULT_FOV_Y, width / height, DEFAULT_NEAR, DEFAULT_FAR)
    }

    /// Recompute for a new viewport size. A zero height yields a degenerate
    /// matrix, same as any other zero aspect.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
        perspective(&mut self.matrix, self.fov_y, self.aspect, self.near, self.far);
    }

    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_viewport_aspect() {
        let projection = Projection::for_viewport(800.0, 400.0);
        assert_eq!(projection.aspect(), 2.0);
        assert_eq!(projection.fov_y(), DEFAULT_FOV_Y);
        assert_eq!(projection.matrix()[11], -1.0);
    }

    #[test]
    fn test_resize_updates_matrix() {
        let mut projection = Projection::for_viewport(800.0, 600.0);
        let before = projection.matrix()[0];
        projection.resize(1600.0, 600.0);
        assert!(projection.matrix()[0] < before);
        // x scale is f / aspect, y scale is f.
        let m = projection.matrix();
        assert!((m[5] / m[0] - projection.aspect()).abs() < 1e-5);
    }
}
