//! Owner of the camera, its projection and the viewport the input arrives in.
//!
//! Event sources hold a `&mut Scene` and push [`SceneEvent`]s into it; the
//! render loop reads [`Scene::uniform`] once per frame.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::camera::{ElementRect, OrbitCamera, PointerEvent, Projection};
use crate::math::{normalize, Vec3};
use crate::types::CameraUniform;

/// Unnormalized light direction: from the right, above and in front.
pub const LIGHT_DIRECTION: Vec3 = [0.5, 0.7, 1.0];

/// Input in client (window) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    Wheel { delta_y: f32 },
    SetBounds { min: f32, max: f32 },
    Resize { width: f32, height: f32 },
}

#[derive(Debug, Clone)]
pub struct Scene {
    camera: OrbitCamera,
    projection: Projection,
    viewport: ElementRect,
    light_direction: Vec3,
    pointer_ndc: (f32, f32),
}

impl Scene {
    pub fn new(camera: OrbitCamera, viewport: ElementRect) -> Self {
        let mut light_direction = [0.0; 3];
        normalize(&mut light_direction, &LIGHT_DIRECTION);

        Self {
            camera,
            projection: Projection::for_viewport(viewport.width, viewport.height),
            viewport,
            light_direction,
            pointer_ndc: (0.0, 0.0),
        }
    }

    pub fn handle(&mut self, event: &SceneEvent) {
        match *event {
            SceneEvent::PointerDown { x, y } => {
                let (x, y) = self.viewport.relative_position(x, y);
                self.camera.on_pointer(PointerEvent::Down { x, y });
            }
            SceneEvent::PointerMove { x, y } => {
                let (x, y) = self.viewport.relative_position(x, y);
                self.pointer_ndc = self.viewport.to_ndc(x, y);
                self.camera.on_pointer(PointerEvent::Move { x, y });
            }
            SceneEvent::PointerUp => self.camera.on_pointer(PointerEvent::Up),
            SceneEvent::Wheel { delta_y } => self.camera.on_wheel(delta_y),
            SceneEvent::SetBounds { min, max } => self.camera.set_bounds(min, max),
            SceneEvent::Resize { width, height } => {
                self.viewport.width = width;
                self.viewport.height = height;
                self.projection.resize(width, height);
                debug!("viewport resized to {width}x{height}");
            }
        }
    }

    /// Everything the renderer needs for one frame.
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::new(&self.camera, self.projection.matrix(), self.light_direction)
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn viewport(&self) -> &ElementRect {
        &self.viewport
    }

    pub fn light_direction(&self) -> Vec3 {
        self.light_direction
    }

    /// Last pointer position in normalized device coordinates.
    pub fn pointer_ndc(&self) -> (f32, f32) {
        self.pointer_ndc
    }
}
