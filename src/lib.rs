pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod geometry;
pub mod math;
pub mod scene;
pub mod traits;
pub mod types;

pub use camera::{OrbitCamera, PointerEvent, PointerState};
pub use scene::{Scene, SceneEvent};
