use glam::{Vec2, Vec3};

use super::frame::FrameInput;
use crate::camera::Camera;

/// Closest the dragged object may get to a viewport edge, as a fraction.
pub const DRAG_EDGE_MARGIN: f32 = 0.15;

/// Outcome of one frame of drag handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Press landed on the object; the drag has begun.
    Started,
    /// Object moved to this position.
    Dragging(Vec3),
    /// Primary button released.
    Ended,
}

/// Drags an object across the world XY plane.
///
/// The host performs the hit test and passes the result in; the state
/// machine only converts viewport motion into world motion. Motion scales
/// with the area visible at the camera's depth, so the object tracks the
/// cursor regardless of zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    enabled: bool,
    dragging: bool,
    pressed_over_ui: bool,
    start_position: Vec3,
    viewport_start: Vec2,
    visible_world: Vec2,
}

impl DragState {
    /// Idle drag state; `enabled` gates every interaction.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            dragging: false,
            pressed_over_ui: false,
            start_position: Vec3::ZERO,
            viewport_start: Vec2::ZERO,
            visible_world: Vec2::ZERO,
        }
    }

    /// Whether dragging is allowed.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Allow or block dragging. Disabling ends any drag in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.dragging = false;
        }
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// World extent visible at the camera's depth, captured on press.
    #[must_use]
    pub fn visible_world(&self) -> Vec2 {
        self.visible_world
    }

    /// Process one frame.
    ///
    /// On the press frame the object already follows the clamped cursor
    /// and the event is [`DragEvent::Started`]. The object's `z` is kept.
    /// `hit` reports whether the cursor is over the object this frame and
    /// is only consulted on a press. `position` is the object's world
    /// position and is updated in place while dragging.
    pub fn update(
        &mut self,
        input: &FrameInput,
        camera: &Camera,
        hit: bool,
        position: &mut Vec3,
    ) -> Option<DragEvent> {
        if !self.enabled {
            return None;
        }

        let mut event = None;

        if input.primary_pressed() {
            self.pressed_over_ui = input.pointer_over_ui();
            if !self.pressed_over_ui && hit {
                self.start_position = *position;
                self.viewport_start = input.viewport_point();
                self.visible_world = visible_world(camera);
                self.dragging = true;
                event = Some(DragEvent::Started);
            }
        }

        // The press frame moves too: an edge press snaps inside the margin.
        if input.primary_held() && self.dragging && !self.pressed_over_ui {
            let point = input
                .viewport_point()
                .clamp(Vec2::splat(DRAG_EDGE_MARGIN), Vec2::splat(1.0 - DRAG_EDGE_MARGIN));
            let delta = (point - self.viewport_start) * self.visible_world;
            *position = self.start_position + delta.extend(0.0);
            event = event.or(Some(DragEvent::Dragging(*position)));
        }

        if input.primary_released() {
            self.pressed_over_ui = false;
            if self.dragging {
                self.dragging = false;
                event = Some(DragEvent::Ended);
            }
        }

        event
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Width and height of the XY plane visible from the camera's depth.
fn visible_world(camera: &Camera) -> Vec2 {
    let height = camera.field_of_view.to_radians().tan() * camera.position.z.abs();
    Vec2::new(height * camera.aspect, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, MouseButton};

    fn camera() -> Camera {
        Camera {
            position: Vec3::new(0.0, 0.0, -10.0),
            field_of_view: 45.0,
            aspect: 2.0,
            ..Camera::default()
        }
    }

    fn press(input: &mut FrameInput, x: f32, y: f32) {
        input.handle_event(InputEvent::CursorMoved { x, y });
        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
    }

    fn release(input: &mut FrameInput) {
        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
    }

    #[test]
    fn drag_moves_object_by_scaled_viewport_delta() {
        let cam = camera();
        let mut input = FrameInput::new(100.0, 100.0);
        let mut drag = DragState::default();
        let mut pos = Vec3::new(1.0, 2.0, 3.0);

        press(&mut input, 50.0, 50.0);
        assert_eq!(drag.update(&input, &cam, true, &mut pos), Some(DragEvent::Started));
        assert!((drag.visible_world() - Vec2::new(20.0, 10.0)).length() < 1e-4);

        input.begin_frame();
        input.handle_event(InputEvent::CursorMoved { x: 75.0, y: 25.0 });
        let event = drag.update(&input, &cam, false, &mut pos);
        assert!(matches!(event, Some(DragEvent::Dragging(_))));
        // (0.25, 0.25) viewport units
        assert!((pos - Vec3::new(6.0, 4.5, 3.0)).length() < 1e-4);

        input.begin_frame();
        release(&mut input);
        assert_eq!(drag.update(&input, &cam, false, &mut pos), Some(DragEvent::Ended));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn cursor_is_clamped_away_from_edges() {
        let cam = camera();
        let mut input = FrameInput::new(100.0, 100.0);
        let mut drag = DragState::default();
        let mut pos = Vec3::ZERO;

        press(&mut input, 50.0, 50.0);
        let _ = drag.update(&input, &cam, true, &mut pos);
        input.begin_frame();
        input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 50.0 });
        let _ = drag.update(&input, &cam, false, &mut pos);
        // 0.85 - 0.5 = 0.35 of a 20-unit width
        assert!((pos.x - 7.0).abs() < 1e-4);
        assert!(pos.y.abs() < 1e-4);
    }

    #[test]
    fn edge_press_moves_object_on_press_frame() {
        let cam = camera();
        let mut input = FrameInput::new(100.0, 100.0);
        let mut drag = DragState::default();
        let mut pos = Vec3::new(0.0, 0.0, 4.0);

        // Viewport (0.05, 0.5) clamps to (0.15, 0.5)
        press(&mut input, 5.0, 50.0);
        assert_eq!(drag.update(&input, &cam, true, &mut pos), Some(DragEvent::Started));
        assert!((pos.x - 2.0).abs() < 1e-4);
        assert!(pos.y.abs() < 1e-4);
        assert_eq!(pos.z, 4.0);
    }

    #[test]
    fn press_over_ui_or_miss_does_not_start() {
        let cam = camera();
        let mut input = FrameInput::new(100.0, 100.0);
        let mut drag = DragState::default();
        let mut pos = Vec3::ZERO;

        input.handle_event(InputEvent::PointerOverUi { over: true });
        press(&mut input, 50.0, 50.0);
        assert_eq!(drag.update(&input, &cam, true, &mut pos), None);

        input.begin_frame();
        release(&mut input);
        input.handle_event(InputEvent::PointerOverUi { over: false });
        assert_eq!(drag.update(&input, &cam, true, &mut pos), None);

        input.begin_frame();
        press(&mut input, 50.0, 50.0);
        assert_eq!(drag.update(&input, &cam, false, &mut pos), None);
        assert_eq!(pos, Vec3::ZERO);
    }

    #[test]
    fn disabled_state_ignores_input() {
        let cam = camera();
        let mut input = FrameInput::new(100.0, 100.0);
        let mut drag = DragState::new(false);
        let mut pos = Vec3::ZERO;
        press(&mut input, 50.0, 50.0);
        assert_eq!(drag.update(&input, &cam, true, &mut pos), None);
        assert!(!drag.is_dragging());
    }
}
