use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::scene::SceneEvent;

/// Adapter that turns Winit window events into scene input
#[derive(Debug, Clone, Default)]
pub struct WinitCameraInput {
    /// Last cursor position (window coordinates)
    cursor: Option<(f32, f32)>,
}

impl WinitCameraInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one Winit event; `None` when it is not camera input
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<SceneEvent> {
        match event {
            WindowEvent::MouseInput { state, button, .. } => self.on_mouse_button(*state, *button),
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.on_cursor_moved(position.x as f32, position.y as f32))
            }
            WindowEvent::MouseWheel { delta, .. } => Self::on_wheel(*delta),
            WindowEvent::Resized(size) => Self::on_resized(*size),
            _ => None,
        }
    }

    /// Left button drives the orbit drag; other buttons are ignored
    pub fn on_mouse_button(&mut self, state: ElementState, button: MouseButton) -> Option<SceneEvent> {
        if button != MouseButton::Left {
            return None;
        }
        match state {
            ElementState::Pressed => {
                // Winit button events carry no position; anchor at the last known cursor.
                let (x, y) = self.cursor.unwrap_or((0.0, 0.0));
                Some(SceneEvent::PointerDown { x, y })
            }
            ElementState::Released => Some(SceneEvent::PointerUp),
        }
    }

    pub fn on_cursor_moved(&mut self, x: f32, y: f32) -> SceneEvent {
        self.cursor = Some((x, y));
        SceneEvent::PointerMove { x, y }
    }

    /// Winit reports positive `y` for scrolling up; scene wheel events use the
    /// opposite sign (positive = towards the user).
    pub fn on_wheel(delta: MouseScrollDelta) -> Option<SceneEvent> {
        let delta_y = wheel_delta_y(delta);
        if delta_y == 0.0 {
            return None;
        }
        Some(SceneEvent::Wheel { delta_y })
    }

    pub fn on_resized(size: PhysicalSize<u32>) -> Option<SceneEvent> {
        if size.width == 0 || size.height == 0 {
            // Minimized; keep the previous projection.
            return None;
        }
        Some(SceneEvent::Resize {
            width: size.width as f32,
            height: size.height as f32,
        })
    }

    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }
}

/// Vertical scroll in scene convention.
pub fn wheel_delta_y(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y,
        MouseScrollDelta::PixelDelta(position) => -(position.y as f32),
    }
}
