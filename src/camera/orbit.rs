use glam::{Quat, Vec2, Vec3};

/// Radians of orbit per full viewport width/height of drag.
pub const ORBIT_RADIANS_PER_VIEWPORT: f32 = 4.0;

/// Camera pose and cursor recorded when a drag begins.
///
/// Every drag frame rotates from this baseline rather than from the
/// previous frame, so long drags do not accumulate error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitBaseline {
    /// Cursor position (pixels) at press.
    pub mouse_start: Vec2,
    /// Camera position relative to the pivot.
    pub offset: Vec3,
    /// Camera orientation.
    pub rotation: Quat,
}

impl OrbitBaseline {
    /// Baseline for a camera pose about `pivot`.
    #[must_use]
    pub fn new(mouse_start: Vec2, position: Vec3, rotation: Quat, pivot: Vec3) -> Self {
        Self {
            mouse_start,
            offset: position - pivot,
            rotation,
        }
    }

    /// Pose after rotating the baseline by `orbit` about `pivot`.
    #[must_use]
    pub fn apply(&self, orbit: Quat, pivot: Vec3) -> (Vec3, Quat) {
        (orbit * self.offset + pivot, orbit * self.rotation)
    }
}

/// Orbit rotation for a drag of `viewport_delta` (viewport units, y up).
///
/// Horizontal drag turns about world up, vertical drag about world left;
/// each axis only when allowed.
#[must_use]
pub fn orbit_rotation(viewport_delta: Vec2, rotate_x: bool, rotate_y: bool) -> Quat {
    let yaw = if rotate_x {
        ORBIT_RADIANS_PER_VIEWPORT * viewport_delta.x
    } else {
        0.0
    };
    let pitch = if rotate_y {
        ORBIT_RADIANS_PER_VIEWPORT * viewport_delta.y
    } else {
        0.0
    };
    Quat::from_rotation_y(yaw) * Quat::from_axis_angle(Vec3::NEG_X, pitch)
}
