//! Shared utilities for the deck runtime.
//!
//! Colours, easing functions, keyframe curves, arrow geometry and frame
//! timing.

pub mod arrow;
pub mod color;
pub mod curve;
pub mod easing;
pub mod frame_timing;
