use glam::Vec2;

use super::event::{InputEvent, MouseButton};

/// Input snapshot for one frame.
///
/// Held state (cursor, primary button, hover) persists across frames;
/// edges (press/release) and scroll accumulate until
/// [`begin_frame`](Self::begin_frame) clears them.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FrameInput {
    cursor: Vec2,
    viewport: Vec2,
    primary_held: bool,
    primary_pressed: bool,
    primary_released: bool,
    scroll: f32,
    pointer_over_ui: bool,
}

impl FrameInput {
    /// Idle input for a viewport of the given pixel size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            cursor: Vec2::ZERO,
            viewport: Vec2::new(width.max(1.0), height.max(1.0)),
            primary_held: false,
            primary_pressed: false,
            primary_released: false,
            scroll: 0.0,
            pointer_over_ui: false,
        }
    }

    /// Clear per-frame edges and scroll. Call once after each deck update.
    pub fn begin_frame(&mut self) {
        self.primary_pressed = false;
        self.primary_released = false;
        self.scroll = 0.0;
    }

    /// Fold one event into the snapshot.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => self.cursor = Vec2::new(x, y),
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                if pressed && !self.primary_held {
                    self.primary_pressed = true;
                }
                if !pressed && self.primary_held {
                    self.primary_released = true;
                }
                self.primary_held = pressed;
            }
            InputEvent::MouseButton { .. } => {}
            InputEvent::Scroll { delta } => self.scroll += delta,
            InputEvent::PointerOverUi { over } => self.pointer_over_ui = over,
            InputEvent::Resized { width, height } => {
                self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
            }
        }
    }

    /// Cursor position in window pixels (origin top-left).
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Primary button currently down.
    #[must_use]
    pub fn primary_held(&self) -> bool {
        self.primary_held
    }

    /// Primary button went down this frame.
    #[must_use]
    pub fn primary_pressed(&self) -> bool {
        self.primary_pressed
    }

    /// Primary button went up this frame.
    #[must_use]
    pub fn primary_released(&self) -> bool {
        self.primary_released
    }

    /// Accumulated scroll this frame (positive = zoom in).
    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Cursor is over an interactive UI element.
    #[must_use]
    pub fn pointer_over_ui(&self) -> bool {
        self.pointer_over_ui
    }

    /// Cursor in viewport space: `[0, 1]` on both axes, origin bottom-left.
    #[must_use]
    pub fn viewport_point(&self) -> Vec2 {
        Vec2::new(
            self.cursor.x / self.viewport.x,
            1.0 - self.cursor.y / self.viewport.y,
        )
    }

    /// Convert a pixel-space delta into viewport units (y up).
    #[must_use]
    pub fn pixels_to_viewport(&self, delta: Vec2) -> Vec2 {
        Vec2::new(delta.x / self.viewport.x, -delta.y / self.viewport.y)
    }
}

impl Default for FrameInput {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut FrameInput, pressed: bool) {
        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        });
    }

    #[test]
    fn press_edge_lasts_one_frame() {
        let mut input = FrameInput::new(100.0, 100.0);
        press(&mut input, true);
        assert!(input.primary_pressed());
        assert!(input.primary_held());
        input.begin_frame();
        assert!(!input.primary_pressed());
        assert!(input.primary_held());
    }

    #[test]
    fn release_edge_only_after_hold() {
        let mut input = FrameInput::new(100.0, 100.0);
        press(&mut input, false);
        assert!(!input.primary_released());
        press(&mut input, true);
        press(&mut input, false);
        assert!(input.primary_released());
        assert!(!input.primary_held());
    }

    #[test]
    fn secondary_buttons_do_not_drive_primary() {
        let mut input = FrameInput::new(100.0, 100.0);
        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert!(!input.primary_held());
    }

    #[test]
    fn scroll_accumulates_within_frame() {
        let mut input = FrameInput::new(100.0, 100.0);
        input.handle_event(InputEvent::Scroll { delta: 1.0 });
        input.handle_event(InputEvent::Scroll { delta: 2.0 });
        assert_eq!(input.scroll(), 3.0);
        input.begin_frame();
        assert_eq!(input.scroll(), 0.0);
    }

    #[test]
    fn viewport_conversion_flips_y() {
        let mut input = FrameInput::new(200.0, 100.0);
        input.handle_event(InputEvent::CursorMoved { x: 50.0, y: 25.0 });
        assert_eq!(input.viewport_point(), Vec2::new(0.25, 0.75));
        assert_eq!(
            input.pixels_to_viewport(Vec2::new(20.0, 10.0)),
            Vec2::new(0.1, -0.1)
        );
    }
}
