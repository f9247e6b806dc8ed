//! Pointer drag state machine and element-relative pointer coordinates.

use serde::{Deserialize, Serialize};

/// Pointer input, already converted to element-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
}

/// Drag state of the orbit controls.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    /// Button held; `last` is the most recently consumed pointer position.
    Dragging { last: (f32, f32) },
}

/// Movement produced by a pointer move while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragDelta {
    pub dx: f32,
    pub dy: f32,
}

impl PointerState {
    /// Advance the machine by one event.
    ///
    /// Returns the pointer delta when the event is a move during a drag,
    /// `None` for every other transition.
    pub fn apply(&mut self, event: PointerEvent) -> Option<DragDelta> {
        match (*self, event) {
            (_, PointerEvent::Down { x, y }) => {
                *self = PointerState::Dragging { last: (x, y) };
                None
            }
            (PointerState::Dragging { last }, PointerEvent::Move { x, y }) => {
                *self = PointerState::Dragging { last: (x, y) };
                Some(DragDelta {
                    dx: x - last.0,
                    dy: y - last.1,
                })
            }
            (PointerState::Idle, PointerEvent::Move { .. }) => None,
            (_, PointerEvent::Up) => {
                *self = PointerState::Idle;
                None
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, PointerState::Dragging { .. })
    }
}

/// Bounding rectangle of the element that receives pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    #[serde(default)]
    pub left: f32,
    #[serde(default)]
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Client coordinates relative to the element's top-left corner.
    pub fn relative_position(&self, client_x: f32, client_y: f32) -> (f32, f32) {
        (client_x - self.left, client_y - self.top)
    }

    /// Element-relative position to normalized device coordinates, +Y up.
    pub fn to_ndc(&self, x: f32, y: f32) -> (f32, f32) {
        let nx = x / self.width;
        let ny = y / self.height;
        (nx * 2.0 - 1.0, (1.0 - ny) * 2.0 - 1.0)
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

impl Default for ElementRect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        assert_eq!(PointerState::default(), PointerState::Idle);
        assert!(!PointerState::default().is_dragging());
    }

    #[test]
    fn test_down_starts_drag() {
        let mut state = PointerState::Idle;
        assert_eq!(state.apply(PointerEvent::Down { x: 10.0, y: 20.0 }), None);
        assert_eq!(state, PointerState::Dragging { last: (10.0, 20.0) });
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut state = PointerState::Idle;
        assert_eq!(state.apply(PointerEvent::Move { x: 50.0, y: 50.0 }), None);
        assert_eq!(state, PointerState::Idle);
    }

    #[test]
    fn test_move_while_dragging_reports_delta() {
        let mut state = PointerState::Dragging { last: (100.0, 100.0) };
        let delta = state.apply(PointerEvent::Move { x: 130.0, y: 90.0 });
        assert_eq!(delta, Some(DragDelta { dx: 30.0, dy: -10.0 }));
        assert_eq!(state, PointerState::Dragging { last: (130.0, 90.0) });
    }

    #[test]
    fn test_up_ends_drag() {
        let mut state = PointerState::Dragging { last: (1.0, 1.0) };
        assert_eq!(state.apply(PointerEvent::Up), None);
        assert_eq!(state, PointerState::Idle);
        // Up while idle stays idle.
        assert_eq!(state.apply(PointerEvent::Up), None);
        assert_eq!(state, PointerState::Idle);
    }

    #[test]
    fn test_down_while_dragging_resets_anchor() {
        let mut state = PointerState::Dragging { last: (1.0, 1.0) };
        state.apply(PointerEvent::Down { x: 5.0, y: 6.0 });
        assert_eq!(state, PointerState::Dragging { last: (5.0, 6.0) });
    }

    #[test]
    fn test_relative_position() {
        let rect = ElementRect::new(10.0, 20.0, 640.0, 480.0);
        assert_eq!(rect.relative_position(110.0, 70.0), (100.0, 50.0));
    }

    #[test]
    fn test_to_ndc_corners() {
        let rect = ElementRect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(rect.to_ndc(0.0, 0.0), (-1.0, 1.0));
        assert_eq!(rect.to_ndc(200.0, 100.0), (1.0, -1.0));
        assert_eq!(rect.to_ndc(100.0, 50.0), (0.0, 0.0));
    }
}
