/// Platform-agnostic input events.
///
/// Hosts translate their window events into these and fold them into a
/// [`FrameInput`](super::FrameInput) before each deck update.
///
/// # Example
///
/// ```
/// use simdeck::input::{FrameInput, InputEvent, MouseButton};
///
/// let mut input = FrameInput::new(800.0, 600.0);
/// input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// input.handle_event(InputEvent::MouseButton {
///     button: MouseButton::Left,
///     pressed: true,
/// });
/// assert!(input.primary_pressed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels, from the left edge.
        x: f32,
        /// Vertical position in physical pixels, from the top edge.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount in wheel lines.
        delta: f32,
    },
    /// Whether the cursor currently sits over an interactive UI element.
    PointerOverUi {
        /// `true` while hovering UI.
        over: bool,
    },
    /// Viewport size changed.
    Resized {
        /// Width in physical pixels.
        width: f32,
        /// Height in physical pixels.
        height: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
