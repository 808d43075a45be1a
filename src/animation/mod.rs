//! Frame-driven transitions: generic tweens and delayed slide fades.
//!
//! Transitions are plain values owned by the component that started them.
//! Each one advances only when its owner calls `advance(dt)`; dropping it
//! cancels it.

/// Delayed alpha fade used for slide visibility.
pub mod fade;
/// Generic start→target interpolation with exact final-frame clamping.
pub mod tween;

pub use fade::Fade;
pub use tween::{Lerp, Tween, TweenStep};
