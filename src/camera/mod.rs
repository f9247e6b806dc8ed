//! Orbit camera, its pointer controls and the projection it is paired with.

mod orbit;
mod pointer;
mod projection;

pub use orbit::{
    OrbitCamera, DEFAULT_MAX_ELEVATION, DEFAULT_MIN_ELEVATION, MAX_DISTANCE, MIN_DISTANCE,
    SENSITIVITY, WHEEL_STEP,
};
pub use pointer::{DragDelta, ElementRect, PointerEvent, PointerState};
pub use projection::{Projection, DEFAULT_FAR, DEFAULT_FOV_Y, DEFAULT_NEAR};
