//! Camera system for slide framing.
//!
//! Provides the scene camera value, the per-slide controller that moves,
//! recolours, orbits and zooms it, and the transitions it drives.

/// Per-slide choreography: assign/release, initialize, orbit and zoom.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Drag baseline and orbit rotation math.
pub mod orbit;
/// Move and background-colour transitions.
pub mod transition;

pub use controller::CameraController;
pub use self::core::{Camera, CameraUniform};
