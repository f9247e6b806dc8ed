pub mod input_adapter;

pub use input_adapter::{wheel_delta_y, WinitCameraInput};
