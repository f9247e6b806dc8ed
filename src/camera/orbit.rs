use std::f32::consts::FRAC_PI_2;

use log::{debug, trace};

use super::pointer::{PointerEvent, PointerState};
use crate::math::{
    clamp, identity, premultiply_in_place, rotation_x, rotation_y, translation, Mat4, Vec3,
};
use crate::traits::ViewSource;

/// Radians of orbit per unit of pointer movement.
pub const SENSITIVITY: f32 = 0.005;
pub const MIN_DISTANCE: f32 = 1.0;
pub const MAX_DISTANCE: f32 = 80.0;
/// Distance change per wheel event, independent of the wheel delta's size.
pub const WHEEL_STEP: f32 = 2.0;

pub const DEFAULT_MIN_ELEVATION: f32 = -FRAC_PI_2;
pub const DEFAULT_MAX_ELEVATION: f32 = FRAC_PI_2;

/// Camera orbiting a fixed pivot, parameterized by azimuth, elevation and
/// distance. The view matrix always looks at the pivot.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    azimuth: f32,
    elevation: f32,
    distance: f32,
    orbit_point: Vec3,
    min_elevation: f32,
    max_elevation: f32,
    pointer: PointerState,
    view_matrix: Mat4,
}

impl OrbitCamera {
    /// Distance and elevation are clamped into range; the view matrix is
    /// ready on return.
    pub fn new(orbit_point: Vec3, distance: f32, azimuth: f32, elevation: f32) -> Self {
        let mut camera = Self {
            azimuth,
            elevation: clamp(elevation, DEFAULT_MIN_ELEVATION, DEFAULT_MAX_ELEVATION),
            distance: clamp(distance, MIN_DISTANCE, MAX_DISTANCE),
            orbit_point,
            min_elevation: DEFAULT_MIN_ELEVATION,
            max_elevation: DEFAULT_MAX_ELEVATION,
            pointer: PointerState::Idle,
            view_matrix: [0.0; 16],
        };
        camera.recompute_view_matrix();
        camera
    }

    /// Rebuild the view matrix from scratch:
    /// translate(-pivot), then rotate Y by azimuth, then rotate X by
    /// elevation, then push back along -Z by distance.
    pub fn recompute_view_matrix(&mut self) {
        let mut step = [0.0; 16];
        let view = &mut self.view_matrix;

        identity(view);

        let pivot = self.orbit_point;
        translation(&mut step, &[-pivot[0], -pivot[1], -pivot[2]]);
        premultiply_in_place(view, &step);

        rotation_y(&mut step, self.azimuth);
        premultiply_in_place(view, &step);

        rotation_x(&mut step, self.elevation);
        premultiply_in_place(view, &step);

        translation(&mut step, &[0.0, 0.0, -self.distance]);
        premultiply_in_place(view, &step);

        trace!(
            "view recomputed: azimuth={:.4} elevation={:.4} distance={:.2}",
            self.azimuth,
            self.elevation,
            self.distance
        );
    }

    /// World-space eye position, derived from the orbit parameters without
    /// inverting the view matrix.
    pub fn position(&self) -> Vec3 {
        let polar = FRAC_PI_2 - self.elevation;
        let d = self.distance;
        [
            d * polar.sin() * (-self.azimuth).sin() + self.orbit_point[0],
            d * polar.cos() + self.orbit_point[1],
            d * polar.sin() * (-self.azimuth).cos() + self.orbit_point[2],
        ]
    }

    /// Unit vector from the eye towards the pivot.
    pub fn view_direction(&self) -> Vec3 {
        let polar = FRAC_PI_2 - self.elevation;
        [
            -polar.sin() * (-self.azimuth).sin(),
            -polar.cos(),
            -polar.sin() * (-self.azimuth).cos(),
        ]
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn orbit_point(&self) -> Vec3 {
        self.orbit_point
    }

    pub fn elevation_bounds(&self) -> (f32, f32) {
        (self.min_elevation, self.max_elevation)
    }

    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_dragging()
    }

    /// Replace the elevation range, pulling the current elevation inside it.
    /// With `min > max` the elevation ends up at `min`.
    pub fn set_bounds(&mut self, min_elevation: f32, max_elevation: f32) {
        self.min_elevation = min_elevation;
        self.max_elevation = max_elevation;
        self.elevation = clamp(self.elevation, min_elevation, max_elevation);
        debug!(
            "elevation bounds set to [{min_elevation}, {max_elevation}], elevation now {}",
            self.elevation
        );
        self.recompute_view_matrix();
    }

    /// Feed one pointer event through the drag state machine.
    pub fn on_pointer(&mut self, event: PointerEvent) {
        let was_dragging = self.pointer.is_dragging();
        let delta = self.pointer.apply(event);

        match (was_dragging, self.pointer.is_dragging()) {
            (false, true) => debug!("orbit drag started"),
            (true, false) => debug!("orbit drag ended"),
            _ => {}
        }

        if let Some(delta) = delta {
            self.azimuth += delta.dx * SENSITIVITY;
            self.elevation = clamp(
                self.elevation + delta.dy * SENSITIVITY,
                self.min_elevation,
                self.max_elevation,
            );
            self.recompute_view_matrix();
        }
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        self.on_pointer(PointerEvent::Down { x, y });
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.on_pointer(PointerEvent::Move { x, y });
    }

    pub fn on_pointer_up(&mut self) {
        self.on_pointer(PointerEvent::Up);
    }

    /// One discrete zoom step per event. Positive `delta_y` (wheel scrolled
    /// towards the user) moves the eye closer; anything else, zero included,
    /// moves it away. Only the sign is used.
    pub fn on_wheel(&mut self, delta_y: f32) {
        let direction = if delta_y > 0.0 { -1.0 } else { 1.0 };
        self.distance = clamp(
            self.distance + direction * WHEEL_STEP,
            MIN_DISTANCE,
            MAX_DISTANCE,
        );
        self.recompute_view_matrix();
    }
}

impl ViewSource for OrbitCamera {
    fn view_matrix(&self) -> &Mat4 {
        OrbitCamera::view_matrix(self)
    }

    fn position(&self) -> Vec3 {
        OrbitCamera::position(self)
    }

    fn view_direction(&self) -> Vec3 {
        OrbitCamera::view_direction(self)
    }
}
