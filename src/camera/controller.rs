use glam::{Vec2, Vec3};

use crate::camera::core::{look_rotation, Camera};
use crate::camera::orbit::{orbit_rotation, OrbitBaseline};
use crate::camera::transition::{CameraMove, ColorTransition, MoveEndpoints};
use crate::error::DeckError;
use crate::input::FrameInput;
use crate::options::CameraRigOptions;
use crate::util::color::Color;

/// Camera choreography for one slide.
///
/// Holds the scene camera only between [`assign_camera`] and
/// [`release_camera`]. While holding it, the controller owns at most one
/// move and one background-colour transition; starting either again drops
/// the previous one, and releasing drops both.
///
/// [`assign_camera`]: Self::assign_camera
/// [`release_camera`]: Self::release_camera
#[derive(Debug, Clone)]
pub struct CameraController {
    rig: CameraRigOptions,
    camera: Option<Camera>,
    moving: Option<CameraMove>,
    changing_color: Option<ColorTransition>,
    baseline: Option<OrbitBaseline>,
    dragging: bool,
}

impl CameraController {
    /// Controller for the given rig; holds no camera yet.
    #[must_use]
    pub fn new(rig: CameraRigOptions) -> Self {
        Self {
            rig,
            camera: None,
            moving: None,
            changing_color: None,
            baseline: None,
            dragging: false,
        }
    }

    /// Authored rig configuration.
    #[must_use]
    pub fn rig(&self) -> &CameraRigOptions {
        &self.rig
    }

    /// The held camera, if any.
    #[must_use]
    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Whether this controller currently holds the camera.
    #[must_use]
    pub fn has_camera(&self) -> bool {
        self.camera.is_some()
    }

    /// Whether a move transition is in flight.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.moving.is_some()
    }

    /// Whether a background-colour transition is in flight.
    #[must_use]
    pub fn is_changing_color(&self) -> bool {
        self.changing_color.is_some()
    }

    /// Pose that the next orbit drag starts from.
    #[must_use]
    pub fn orbit_baseline(&self) -> Option<&OrbitBaseline> {
        self.baseline.as_ref()
    }

    /// Take ownership of the camera. No transition starts.
    pub fn assign_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }

    /// Cancel every in-flight transition and hand the camera back.
    ///
    /// Safe to call repeatedly; returns `None` when nothing is held.
    pub fn release_camera(&mut self) -> Option<Camera> {
        self.moving = None;
        self.changing_color = None;
        self.dragging = false;
        self.camera.take()
    }

    /// Move orbit and zoom to a new pivot.
    pub fn set_pivot_point(&mut self, pivot: Vec3) {
        self.rig.pivot_point = pivot;
    }

    /// Start moving the held camera into this slide's framing.
    ///
    /// Returns the slide's background colour so the caller can propagate
    /// the matching theme.
    ///
    /// # Errors
    ///
    /// [`DeckError::CameraNotAssigned`] when no camera is held.
    pub fn initialize_camera(&mut self) -> Result<Color, DeckError> {
        let camera = self.camera.as_mut().ok_or(DeckError::CameraNotAssigned)?;
        let rig = &self.rig;

        if !camera.background.rgb_eq(&rig.background_color) {
            self.changing_color = Some(ColorTransition::new(
                camera.background,
                rig.background_color,
                rig.color_transition_time,
            ));
        }

        // Perspective while moving; orthographic framing is applied on arrival.
        camera.orthographic = false;

        let target_rotation = look_rotation(rig.look_at - rig.position, Vec3::Y);
        if camera.matches_pose(rig.position, target_rotation, rig.field_of_view) {
            self.moving = None;
            settle(camera, rig);
        } else {
            log::debug!(
                "camera move: {:?} -> {:?} over {}s",
                camera.position,
                rig.position,
                rig.move_time
            );
            self.moving = Some(CameraMove::new(
                MoveEndpoints {
                    start_position: camera.position,
                    target_position: rig.position,
                    start_rotation: camera.rotation,
                    target_rotation,
                    start_fov: camera.field_of_view,
                    target_fov: rig.field_of_view,
                },
                rig.move_time,
                rig.rotation_curve.clone(),
            ));
        }

        self.dragging = false;
        self.baseline = Some(OrbitBaseline::new(
            Vec2::ZERO,
            camera.position,
            camera.rotation,
            rig.pivot_point,
        ));
        Ok(rig.background_color)
    }

    /// Per-frame step: orbit and zoom when idle, then advance transitions.
    pub fn update(&mut self, dt: f32, input: &FrameInput) {
        if self.camera.is_none() {
            return;
        }
        if self.moving.is_none() {
            self.orbit(input);
            self.zoom(input.scroll());
        }
        self.advance_move(dt);
        self.advance_color(dt);
    }

    fn orbit(&mut self, input: &FrameInput) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };
        let rig = &self.rig;
        if !rig.can_rotate_x && !rig.can_rotate_y {
            return;
        }

        if input.primary_pressed() {
            self.baseline = Some(OrbitBaseline::new(
                input.cursor(),
                camera.position,
                camera.rotation,
                rig.pivot_point,
            ));
            self.dragging = !input.pointer_over_ui();
        }

        if input.primary_held() && self.dragging {
            if let Some(baseline) = &self.baseline {
                let delta = input.pixels_to_viewport(input.cursor() - baseline.mouse_start);
                let orbit = orbit_rotation(delta, rig.can_rotate_x, rig.can_rotate_y);
                let (position, rotation) = baseline.apply(orbit, rig.pivot_point);
                camera.position = position;
                camera.rotation = rotation;
            }
        }

        if input.primary_released() {
            self.dragging = false;
        }
    }

    fn zoom(&mut self, scroll: f32) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };
        let rig = &self.rig;
        if !rig.can_zoom || scroll == 0.0 {
            return;
        }
        let step = scroll * rig.scroll_scale_factor;

        if camera.orthographic {
            camera.orthographic_size =
                clamp_zoom(camera.orthographic_size - step, rig.min_zoom, rig.max_zoom);
        } else {
            let offset = camera.position - rig.pivot_point;
            let direction = offset.normalize_or_zero();
            if direction == Vec3::ZERO {
                return;
            }
            let distance = clamp_zoom(offset.length() - step, rig.min_zoom, rig.max_zoom);
            camera.position = rig.pivot_point + direction * distance;
        }
    }

    fn advance_move(&mut self, dt: f32) {
        let (Some(camera), Some(moving)) = (self.camera.as_mut(), self.moving.as_mut())
        else {
            return;
        };
        let sample = moving.advance(dt);
        camera.position = sample.position;
        camera.rotation = sample.rotation;
        camera.field_of_view = sample.field_of_view;

        if sample.finished {
            self.moving = None;
            settle(camera, &self.rig);
            self.baseline = Some(OrbitBaseline::new(
                Vec2::ZERO,
                camera.position,
                camera.rotation,
                self.rig.pivot_point,
            ));
        }
    }

    fn advance_color(&mut self, dt: f32) {
        let (Some(camera), Some(fade)) = (self.camera.as_mut(), self.changing_color.as_mut())
        else {
            return;
        };
        let step = fade.advance(dt);
        camera.background = step.value();
        if step.is_finished() {
            self.changing_color = None;
        }
    }
}

/// Snap to the rig's final framing.
///
/// The final orientation comes from a fresh look-at, which is
/// authoritative over whatever the rotation interpolation ended on.
fn settle(camera: &mut Camera, rig: &CameraRigOptions) {
    camera.position = rig.position;
    camera.look_at(rig.look_at);
    camera.field_of_view = rig.field_of_view;
    if rig.orthographic {
        let half_angle = rig.field_of_view.to_radians() / 2.0;
        camera.orthographic_size =
            half_angle.tan() * (camera.position - rig.pivot_point).length();
        camera.orthographic = true;
    }
}

fn clamp_zoom(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, MouseButton};

    fn rig() -> CameraRigOptions {
        CameraRigOptions {
            position: Vec3::new(0.0, 0.0, -100.0),
            field_of_view: 20.0,
            move_time: 1.0,
            color_transition_time: 0.5,
            ..CameraRigOptions::default()
        }
    }

    fn camera_at_rig(rig: &CameraRigOptions) -> Camera {
        Camera::looking_at(rig.position, rig.look_at, rig.field_of_view)
    }

    fn press(input: &mut FrameInput, pressed: bool) {
        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        });
    }

    #[test]
    fn initialize_without_camera_is_a_contract_error() {
        let mut cc = CameraController::new(rig());
        assert!(matches!(
            cc.initialize_camera(),
            Err(DeckError::CameraNotAssigned)
        ));
    }

    #[test]
    fn already_framed_camera_does_not_move_but_checks_color() {
        let rig = rig();
        let mut camera = camera_at_rig(&rig);
        camera.background = Color::BLACK;
        let mut cc = CameraController::new(rig);
        cc.assign_camera(camera);

        let reported = cc.initialize_camera().unwrap();
        assert_eq!(reported, Color::WHITE);
        assert!(!cc.is_moving());
        assert!(cc.is_changing_color());
    }

    #[test]
    fn matching_background_starts_no_color_transition() {
        let rig = rig();
        let mut camera = camera_at_rig(&rig);
        camera.background = Color::rgba(1.0, 1.0, 1.0, 0.0);
        let mut cc = CameraController::new(rig);
        cc.assign_camera(camera);
        let _ = cc.initialize_camera().unwrap();
        assert!(!cc.is_changing_color());
    }

    #[test]
    fn move_lands_exactly_and_resets_baseline() {
        let rig = rig();
        let mut cc = CameraController::new(rig.clone());
        cc.assign_camera(Camera::looking_at(Vec3::new(30.0, 5.0, 0.0), Vec3::ZERO, 60.0));
        let _ = cc.initialize_camera().unwrap();
        assert!(cc.is_moving());

        let input = FrameInput::new(800.0, 600.0);
        cc.update(0.5, &input);
        assert!(cc.is_moving());
        cc.update(0.75, &input);
        assert!(!cc.is_moving());

        let cam = cc.camera().unwrap();
        assert_eq!(cam.position, rig.position);
        assert_eq!(cam.field_of_view, 20.0);
        assert!(cam.forward().abs_diff_eq(Vec3::Z, 1e-5));
        let baseline = cc.orbit_baseline().unwrap();
        assert_eq!(baseline.offset, rig.position - rig.pivot_point);
        assert_eq!(baseline.rotation, cam.rotation);
    }

    #[test]
    fn orthographic_framing_applies_after_move() {
        let rig = CameraRigOptions {
            orthographic: true,
            ..rig()
        };
        let mut cc = CameraController::new(rig);
        cc.assign_camera(Camera::default());
        let _ = cc.initialize_camera().unwrap();
        assert!(!cc.camera().unwrap().orthographic);

        cc.update(2.0, &FrameInput::default());
        let cam = cc.camera().unwrap();
        assert!(cam.orthographic);
        let expected = 10.0_f32.to_radians().tan() * 100.0;
        assert!((cam.orthographic_size - expected).abs() < 1e-3);
    }

    #[test]
    fn release_cancels_transitions_and_is_idempotent() {
        let mut cc = CameraController::new(rig());
        let mut camera = Camera::default();
        camera.background = Color::BLACK;
        cc.assign_camera(camera);
        let _ = cc.initialize_camera().unwrap();
        assert!(cc.is_moving());
        assert!(cc.is_changing_color());

        assert!(cc.release_camera().is_some());
        assert!(!cc.is_moving());
        assert!(!cc.is_changing_color());
        assert!(cc.release_camera().is_none());
    }

    #[test]
    fn color_transition_clamps_to_target() {
        let rig = rig();
        let mut camera = camera_at_rig(&rig);
        camera.background = Color::BLACK;
        let mut cc = CameraController::new(rig);
        cc.assign_camera(camera);
        let _ = cc.initialize_camera().unwrap();

        let input = FrameInput::default();
        cc.update(0.25, &input);
        assert_eq!(cc.camera().unwrap().background, Color::GRAY);
        cc.update(5.0, &input);
        assert_eq!(cc.camera().unwrap().background, Color::WHITE);
        assert!(!cc.is_changing_color());
    }

    #[test]
    fn zoom_is_clamped_in_perspective() {
        let rig = CameraRigOptions {
            can_zoom: true,
            position: Vec3::new(0.0, 0.0, -20.0),
            ..rig()
        };
        let mut cc = CameraController::new(rig.clone());
        cc.assign_camera(camera_at_rig(&rig));
        let _ = cc.initialize_camera().unwrap();

        let mut input = FrameInput::default();
        input.handle_event(InputEvent::Scroll { delta: 10_000.0 });
        cc.update(0.016, &input);
        let distance = cc.camera().unwrap().position.length();
        assert!((distance - rig.min_zoom).abs() < 1e-4);

        input.begin_frame();
        input.handle_event(InputEvent::Scroll { delta: -10_000.0 });
        cc.update(0.016, &input);
        let distance = cc.camera().unwrap().position.length();
        assert!((distance - rig.max_zoom).abs() < 1e-4);
    }

    #[test]
    fn zoom_is_clamped_in_orthographic() {
        let rig = CameraRigOptions {
            can_zoom: true,
            orthographic: true,
            position: Vec3::new(0.0, 0.0, -20.0),
            ..rig()
        };
        let mut cc = CameraController::new(rig.clone());
        cc.assign_camera(camera_at_rig(&rig));
        let _ = cc.initialize_camera().unwrap();
        assert!(cc.camera().unwrap().orthographic);

        let mut input = FrameInput::default();
        input.handle_event(InputEvent::Scroll { delta: -1_000.0 });
        cc.update(0.016, &input);
        assert_eq!(cc.camera().unwrap().orthographic_size, rig.max_zoom);
    }

    #[test]
    fn zoom_and_orbit_wait_for_move() {
        let rig = CameraRigOptions {
            can_zoom: true,
            can_rotate_x: true,
            ..rig()
        };
        let mut cc = CameraController::new(rig);
        cc.assign_camera(Camera::looking_at(Vec3::new(0.0, 0.0, -80.0), Vec3::ZERO, 60.0));
        let _ = cc.initialize_camera().unwrap();
        assert!(cc.is_moving());

        let mut input = FrameInput::new(100.0, 100.0);
        input.handle_event(InputEvent::CursorMoved { x: 30.0, y: 30.0 });
        input.handle_event(InputEvent::Scroll { delta: 50.0 });
        press(&mut input, true);
        cc.update(0.1, &input);

        // The press was ignored: the baseline still comes from initialization.
        assert_eq!(cc.orbit_baseline().unwrap().mouse_start, Vec2::ZERO);
        let z = cc.camera().unwrap().position.z;
        let expected = -80.0 - 20.0 * (0.01 * (3.0 - 0.2));
        assert!((z - expected).abs() < 1e-3);
        assert!(cc.is_moving());
    }

    #[test]
    fn orbit_rotates_from_baseline_without_drift() {
        let rig = CameraRigOptions {
            can_rotate_x: true,
            can_rotate_y: true,
            ..rig()
        };
        let mut cc = CameraController::new(rig.clone());
        cc.assign_camera(camera_at_rig(&rig));
        let _ = cc.initialize_camera().unwrap();

        let mut input = FrameInput::new(100.0, 100.0);
        input.handle_event(InputEvent::CursorMoved { x: 50.0, y: 50.0 });
        press(&mut input, true);
        cc.update(0.016, &input);
        input.begin_frame();

        // Same cursor offset sampled twice gives the same pose.
        input.handle_event(InputEvent::CursorMoved { x: 60.0, y: 50.0 });
        cc.update(0.016, &input);
        let first = cc.camera().unwrap().clone();
        cc.update(0.016, &input);
        assert_eq!(cc.camera().unwrap().position, first.position);
        assert!((first.position.length() - 100.0).abs() < 1e-3);
        assert!(!first.position.abs_diff_eq(rig.position, 1e-3));

        // Release, then press again: baseline is the current pose.
        press(&mut input, false);
        cc.update(0.016, &input);
        input.begin_frame();
        press(&mut input, true);
        cc.update(0.016, &input);
        let baseline = cc.orbit_baseline().unwrap();
        assert!(baseline.offset.abs_diff_eq(first.position, 1e-5));
        assert_eq!(baseline.rotation, first.rotation);
        assert_eq!(baseline.mouse_start, Vec2::new(60.0, 50.0));
        assert_eq!(cc.camera().unwrap().position, first.position);
    }

    #[test]
    fn press_over_ui_does_not_orbit() {
        let rig = CameraRigOptions {
            can_rotate_x: true,
            ..rig()
        };
        let mut cc = CameraController::new(rig.clone());
        cc.assign_camera(camera_at_rig(&rig));
        let _ = cc.initialize_camera().unwrap();

        let mut input = FrameInput::new(100.0, 100.0);
        input.handle_event(InputEvent::PointerOverUi { over: true });
        press(&mut input, true);
        cc.update(0.016, &input);
        input.begin_frame();
        input.handle_event(InputEvent::CursorMoved { x: 80.0, y: 0.0 });
        cc.update(0.016, &input);
        assert_eq!(cc.camera().unwrap().position, rig.position);
    }
}
