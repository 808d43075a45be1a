//! Arrow (vector) geometry: body segment, arrowhead and label placement.
//!
//! Pure geometry; the host draws the resulting line strips however it
//! likes.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::color::Color;

/// World axis the arrowhead plane contains alongside the arrow itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AlignAxis {
    /// Head lies in the plane of the arrow and world X.
    #[default]
    X,
    /// Head lies in the plane of the arrow and world Y.
    Y,
    /// Head lies in the plane of the arrow and world Z.
    Z,
}

impl AlignAxis {
    /// Normal of the head plane for an arrow pointing along `direction`.
    ///
    /// Falls back to a fixed plane when the arrow is parallel to the axis.
    fn plane_normal(self, direction: Vec3) -> Vec3 {
        let (axis, fallback) = match self {
            Self::X => (Vec3::X, Vec3::Z),
            Self::Y => (Vec3::Y, Vec3::Z),
            Self::Z => (Vec3::Z, Vec3::Y),
        };
        let normal = direction.cross(axis).normalize_or_zero();
        if normal == Vec3::ZERO {
            fallback
        } else {
            normal
        }
    }
}

/// Authored arrow parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Arrow {
    /// Start of the arrow.
    #[schemars(with = "[f32; 3]")]
    pub tail: Vec3,
    /// Tip of the arrow.
    #[schemars(with = "[f32; 3]")]
    pub head: Vec3,
    /// Stroke width.
    pub line_width: f32,
    /// Stroke and label colour.
    pub color: Color,
    /// Draw the body only.
    pub headless: bool,
    /// Plane the arrowhead lies in.
    pub head_alignment: AlignAxis,
    /// Length of each arrowhead stroke.
    pub head_length: f32,
    /// Half-angle between the arrowhead strokes, in degrees.
    pub head_angle: f32,
    /// Label position along the arrow, `0` at the tail and `1` at the head.
    pub label_position: f32,
    /// Perpendicular label offset within the head plane.
    pub label_offset: f32,
}

impl Default for Arrow {
    fn default() -> Self {
        Self {
            tail: Vec3::ZERO,
            head: Vec3::new(2.0, 1.0, 0.0),
            line_width: 0.1,
            color: Color::BLACK,
            headless: false,
            head_alignment: AlignAxis::X,
            head_length: 0.5,
            head_angle: 45.0,
            label_position: 0.5,
            label_offset: 0.0,
        }
    }
}

/// Computed line strips for an [`Arrow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    /// Body segment, tail then head.
    pub body: [Vec3; 2],
    /// Arrowhead strip: one barb, the tip, the other barb.
    pub head: [Vec3; 3],
    /// Whether the body should be drawn.
    pub body_visible: bool,
    /// Whether the arrowhead should be drawn.
    pub head_visible: bool,
    /// Label anchor, absent for a zero-length arrow.
    pub label: Option<Vec3>,
    /// Stroke width.
    pub line_width: f32,
    /// Stroke colour.
    pub color: Color,
}

impl Arrow {
    /// Arrow from `tail` to `head` with default styling.
    #[must_use]
    pub fn between(tail: Vec3, head: Vec3) -> Self {
        Self {
            tail,
            head,
            ..Self::default()
        }
    }

    /// Head minus tail.
    #[must_use]
    pub fn displacement(&self) -> Vec3 {
        self.head - self.tail
    }

    /// Move both ends.
    pub fn set_positions(&mut self, tail: Vec3, head: Vec3) {
        self.tail = tail;
        self.head = head;
    }

    /// Lay out body, head and label.
    #[must_use]
    pub fn geometry(&self) -> ArrowGeometry {
        let displacement = self.displacement();
        let length = displacement.length();
        let visible = length > 0.0;

        let head = if visible {
            let back = -displacement / length;
            let normal = self.head_alignment.plane_normal(displacement);
            let side = back.cross(normal);
            let angle = self.head_angle.to_radians();
            let (sin, cos) = angle.sin_cos();
            let barb = |s: f32| self.head + self.head_length * (s * sin * side + cos * back);
            [barb(1.0), self.head, barb(-1.0)]
        } else {
            [self.head; 3]
        };

        let label = visible.then(|| {
            let along = displacement / length;
            let normal = self.head_alignment.plane_normal(displacement);
            let up = normal.cross(along);
            self.tail + self.label_position * length * along + self.label_offset * up
        });

        ArrowGeometry {
            body: [self.tail, self.head],
            head,
            body_visible: visible,
            head_visible: visible && !self.headless,
            label,
            line_width: self.line_width,
            color: self.color,
        }
    }
}
