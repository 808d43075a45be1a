use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::color::Color;
use crate::util::curve::Curve;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Rig", inline)]
#[serde(default)]
/// Per-slide camera pose, background and interaction limits.
#[allow(clippy::struct_excessive_bools)]
pub struct CameraRigOptions {
    /// Background colour the camera fades to on slide entry.
    #[schemars(title = "Background Color")]
    pub background_color: Color,
    /// Seconds spent fading the background colour.
    #[schemars(title = "Color Transition Time", range(min = 0.0))]
    pub color_transition_time: f32,
    /// Eye position the camera moves to.
    #[schemars(with = "[f32; 3]")]
    pub position: Vec3,
    /// Point the camera faces once in place.
    #[schemars(with = "[f32; 3]")]
    pub look_at: Vec3,
    /// Seconds spent moving into place.
    #[schemars(title = "Move Time", range(min = 0.0))]
    pub move_time: f32,
    /// Switch to an equivalent orthographic framing after the move.
    pub orthographic: bool,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 179.0))]
    pub field_of_view: f32,
    /// Point orbit and zoom are computed about.
    #[schemars(with = "[f32; 3]")]
    pub pivot_point: Vec3,
    /// Horizontal drag orbits about the up axis.
    pub can_rotate_x: bool,
    /// Vertical drag orbits about the left axis.
    pub can_rotate_y: bool,
    /// Scroll wheel zooms.
    pub can_zoom: bool,
    /// World units (or orthographic size) per scroll line.
    #[schemars(title = "Scroll Scale", range(min = 0.0))]
    pub scroll_scale_factor: f32,
    /// Lower bound on pivot distance / orthographic size.
    pub min_zoom: f32,
    /// Upper bound on pivot distance / orthographic size.
    pub max_zoom: f32,
    /// Easing applied to rotation during the move, sampled by raw time.
    pub rotation_curve: Curve,
}

impl Default for CameraRigOptions {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            color_transition_time: 0.5,
            position: Vec3::new(0.0, 0.0, -100.0),
            look_at: Vec3::ZERO,
            move_time: 1.0,
            orthographic: false,
            field_of_view: 20.0,
            pivot_point: Vec3::ZERO,
            can_rotate_x: false,
            can_rotate_y: false,
            can_zoom: false,
            scroll_scale_factor: 0.1,
            min_zoom: 5.0,
            max_zoom: 50.0,
            rotation_curve: Curve::default(),
        }
    }
}
