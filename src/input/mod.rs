//! Input handling: platform-agnostic events, the per-frame snapshot they
//! fold into, and the XY-plane drag state machine.

/// XY-plane object dragging.
pub mod drag;
/// Platform-agnostic input events.
pub mod event;
/// Per-frame input snapshot.
pub mod frame;

pub use drag::{DragEvent, DragState};
pub use event::{InputEvent, MouseButton};
pub use frame::FrameInput;
