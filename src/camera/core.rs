use glam::{Mat3, Mat4, Quat, Vec3};

use crate::util::color::Color;

/// Positional tolerance used when deciding whether a camera already sits at
/// its target pose.
pub const POSITION_EPSILON: f32 = 1e-5;

/// Quaternions whose `|dot|` exceeds this are treated as the same rotation.
const ROTATION_DOT_THRESHOLD: f32 = 1.0 - 1e-6;

/// The single scene camera.
///
/// Right-handed, looking down its local `-Z` with `+Y` up. The camera is a
/// plain value: whoever holds it owns it, and handing it to another slide
/// is a move.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Orientation in world space.
    pub rotation: Quat,
    /// Vertical field of view in degrees (perspective mode).
    pub field_of_view: f32,
    /// Orthographic projection instead of perspective.
    pub orthographic: bool,
    /// Half the visible height in world units (orthographic mode).
    pub orthographic_size: f32,
    /// Clear colour behind the scene.
    pub background: Color,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Perspective camera at `position` looking at `target`.
    #[must_use]
    pub fn looking_at(position: Vec3, target: Vec3, field_of_view: f32) -> Self {
        Self {
            position,
            rotation: look_rotation(target - position, Vec3::Y),
            field_of_view,
            ..Self::default()
        }
    }

    /// Unit view direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Unit up direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Rotate in place to face `target`, keeping world `+Y` as up.
    pub fn look_at(&mut self, target: Vec3) {
        self.rotation = look_rotation(target - self.position, Vec3::Y);
    }

    /// Whether the camera already matches the given pose and field of view.
    ///
    /// Position and rotation use small tolerances; field of view is exact.
    #[must_use]
    pub fn matches_pose(
        &self,
        position: Vec3,
        rotation: Quat,
        field_of_view: f32,
    ) -> bool {
        self.position.abs_diff_eq(position, POSITION_EPSILON)
            && self.rotation.dot(rotation).abs() > ROTATION_DOT_THRESHOLD
            && self.field_of_view == field_of_view
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    /// Projection matrix for the current mode, `[0, 1]` depth range.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        if self.orthographic {
            let h = self.orthographic_size;
            let w = h * self.aspect;
            Mat4::orthographic_rh(-w, w, -h, h, self.znear, self.zfar)
        } else {
            Mat4::perspective_rh(
                self.field_of_view.to_radians(),
                self.aspect,
                self.znear,
                self.zfar,
            )
        }
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            field_of_view: 60.0,
            orthographic: false,
            orthographic_size: 5.0,
            background: Color::WHITE,
            aspect: 16.0 / 9.0,
            znear: 0.3,
            zfar: 1000.0,
        }
    }
}

/// Orientation whose forward (`-Z`) axis points along `direction`.
///
/// Falls back to world `+Z` as the up hint when `direction` is parallel to
/// `up`, and to identity for a zero direction.
#[must_use]
pub fn look_rotation(direction: Vec3, up: Vec3) -> Quat {
    let back = -direction.normalize_or_zero();
    if back == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let mut right = up.cross(back);
    if right.length_squared() < 1e-12 {
        right = Vec3::Z.cross(back);
    }
    let right = right.normalize();
    let true_up = back.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, true_up, back)).normalize()
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Background clear colour (RGBA).
    pub clear_color: [f32; 4],
    /// 1 when orthographic, 0 when perspective.
    pub orthographic: u32,
    /// Orthographic half height.
    pub orthographic_size: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 2],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 16.0 / 9.0,
            forward: [0.0, 0.0, -1.0],
            fovy: 60.0,
            clear_color: Color::WHITE.to_array(),
            orthographic: 0,
            orthographic_size: 5.0,
            _pad: [0.0; 2],
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.position.to_array();
        self.aspect = camera.aspect;
        self.forward = camera.forward().to_array();
        self.fovy = camera.field_of_view;
        self.clear_color = camera.background.to_array();
        self.orthographic = u32::from(camera.orthographic);
        self.orthographic_size = camera.orthographic_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_rotation_points_forward_along_direction() {
        let dir = Vec3::new(1.0, 2.0, -3.0).normalize();
        let q = look_rotation(dir, Vec3::Y);
        assert!((q * Vec3::NEG_Z).abs_diff_eq(dir, 1e-5));
        // Camera up stays in the plane of world up and direction
        assert!((q * Vec3::Y).y > 0.0);
    }

    #[test]
    fn look_rotation_handles_vertical_direction() {
        let q = look_rotation(Vec3::NEG_Y, Vec3::Y);
        assert!((q * Vec3::NEG_Z).abs_diff_eq(Vec3::NEG_Y, 1e-5));
        assert!(q.is_normalized());
    }

    #[test]
    fn looking_at_faces_target() {
        let cam = Camera::looking_at(Vec3::new(0.0, 0.0, -100.0), Vec3::ZERO, 20.0);
        assert!(cam.forward().abs_diff_eq(Vec3::Z, 1e-5));
        assert!(cam.up().abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let cam = Camera::looking_at(Vec3::new(3.0, 4.0, 5.0), Vec3::ZERO, 45.0);
        let eye_in_view = cam.view_matrix().transform_point3(cam.position);
        assert!(eye_in_view.abs_diff_eq(Vec3::ZERO, 1e-4));
        let target_in_view = cam.view_matrix().transform_point3(Vec3::ZERO);
        assert!(target_in_view.z < 0.0);
    }

    #[test]
    fn matches_pose_is_exact_on_fov() {
        let cam = Camera::looking_at(Vec3::new(0.0, 0.0, -10.0), Vec3::ZERO, 20.0);
        assert!(cam.matches_pose(cam.position, cam.rotation, 20.0));
        assert!(cam.matches_pose(cam.position, -cam.rotation, 20.0));
        assert!(!cam.matches_pose(cam.position, cam.rotation, 20.5));
    }

    #[test]
    fn uniform_tracks_projection_mode() {
        let mut cam = Camera::default();
        cam.orthographic = true;
        cam.background = Color::BLACK;
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&cam);
        assert_eq!(uniform.orthographic, 1);
        assert_eq!(uniform.clear_color, [0.0, 0.0, 0.0, 1.0]);
    }
}
