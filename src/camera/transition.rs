//! In-flight camera transitions owned by a [`CameraController`].
//!
//! [`CameraController`]: super::controller::CameraController

use glam::{Quat, Vec3};

use crate::animation::tween::Tween;
use crate::util::color::Color;
use crate::util::curve::Curve;
use crate::util::easing::EasingFunction;

/// Camera pose sampled from a [`CameraMove`] on one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveSample {
    /// Interpolated eye position.
    pub position: Vec3,
    /// Interpolated orientation.
    pub rotation: Quat,
    /// Interpolated vertical field of view in degrees.
    pub field_of_view: f32,
    /// Whether the move reached its duration on this frame.
    pub finished: bool,
}

/// Simultaneous position, rotation and field-of-view move.
///
/// Position and FOV follow a smoothstep ease. Rotation follows the
/// authored curve sampled at the raw time fraction, so the turn may lead
/// or lag the translation.
#[derive(Debug, Clone)]
pub struct CameraMove {
    position: Tween<Vec3>,
    field_of_view: Tween<f32>,
    rotation_start: Quat,
    rotation_target: Quat,
    rotation_curve: Curve,
}

/// Start and target values for a [`CameraMove`].
#[derive(Debug, Clone, Copy)]
pub struct MoveEndpoints {
    /// Position the camera leaves from.
    pub start_position: Vec3,
    /// Position the camera arrives at.
    pub target_position: Vec3,
    /// Orientation the camera leaves from.
    pub start_rotation: Quat,
    /// Orientation the camera arrives at.
    pub target_rotation: Quat,
    /// Field of view the camera leaves from.
    pub start_fov: f32,
    /// Field of view the camera arrives at.
    pub target_fov: f32,
}

impl CameraMove {
    /// Start a move lasting `duration` seconds.
    #[must_use]
    pub fn new(endpoints: MoveEndpoints, duration: f32, rotation_curve: Curve) -> Self {
        Self {
            position: Tween::with_easing(
                endpoints.start_position,
                endpoints.target_position,
                duration,
                EasingFunction::SmoothStep,
            ),
            field_of_view: Tween::with_easing(
                endpoints.start_fov,
                endpoints.target_fov,
                duration,
                EasingFunction::SmoothStep,
            ),
            rotation_start: endpoints.start_rotation,
            rotation_target: endpoints.target_rotation,
            rotation_curve,
        }
    }

    /// Target position of the move.
    #[must_use]
    pub fn target_position(&self) -> Vec3 {
        self.position.target()
    }

    /// Target field of view of the move.
    #[must_use]
    pub fn target_fov(&self) -> f32 {
        self.field_of_view.target()
    }

    /// Advance by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> MoveSample {
        let position = self.position.advance(dt);
        let field_of_view = self.field_of_view.advance(dt);

        let raw = self.position.raw_fraction();
        let turn = self.rotation_curve.evaluate(raw).clamp(0.0, 1.0);
        let rotation = if position.is_finished() {
            self.rotation_target
        } else {
            self.rotation_start.lerp(self.rotation_target, turn)
        };

        MoveSample {
            position: position.value(),
            rotation,
            field_of_view: field_of_view.value(),
            finished: position.is_finished(),
        }
    }
}

/// Linear background-colour transition.
pub type ColorTransition = Tween<Color>;

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> MoveEndpoints {
        MoveEndpoints {
            start_position: Vec3::ZERO,
            target_position: Vec3::new(10.0, 0.0, 0.0),
            start_rotation: Quat::IDENTITY,
            target_rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            start_fov: 60.0,
            target_fov: 20.0,
        }
    }

    #[test]
    fn position_and_fov_use_smoothstep() {
        let mut mv = CameraMove::new(endpoints(), 1.0, Curve::linear());
        let sample = mv.advance(0.25);
        assert!((sample.position.x - 1.5625).abs() < 1e-4);
        assert!((sample.field_of_view - (60.0 - 40.0 * 0.156_25)).abs() < 1e-4);
        assert!(!sample.finished);
    }

    #[test]
    fn rotation_follows_curve_at_raw_fraction() {
        let mut mv = CameraMove::new(endpoints(), 1.0, Curve::linear());
        let sample = mv.advance(0.5);
        let expected = Quat::IDENTITY.lerp(endpoints().target_rotation, 0.5);
        assert!(sample.rotation.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn final_frame_is_exact() {
        let mut mv = CameraMove::new(endpoints(), 0.5, Curve::default());
        let _ = mv.advance(0.25);
        let sample = mv.advance(1.0);
        assert!(sample.finished);
        assert_eq!(sample.position, Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(sample.field_of_view, 20.0);
        assert_eq!(sample.rotation, endpoints().target_rotation);
    }
}
