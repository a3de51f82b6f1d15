//! Viewer camera: eye, look-direction offset and up vector.

use glam::{Mat3, Mat4, Vec3};

use crate::command::{Axis, Sign};
use crate::config::{camera as config, interaction};

/// The camera.
///
/// Holds the mutable eye position, the look-direction offset `at` (the view
/// target is `eye + at`) and the up vector. View and projection matrices are
/// derived fresh every frame; nothing is cached because all three fields
/// change under camera commands.
#[derive(Debug, Clone)]
pub struct Camera {
    eye: Vec3,
    at: Vec3,
    up: Vec3,
}

impl Camera {
    /// Camera at the initial pose.
    pub fn new() -> Self {
        Self {
            eye: config::EYE,
            at: config::AT,
            up: config::UP,
        }
    }

    /// Current eye position.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Current view target, `eye + at`.
    pub fn target(&self) -> Vec3 {
        self.eye + self.at
    }

    /// Current up vector.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// View matrix for the current pose.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target(), self.up)
    }

    /// Projection matrix for the given viewport aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(config::FOV, aspect, config::NEAR_PLANE, config::FAR_PLANE)
    }

    /// Translate the eye by the fixed step along `axis`.
    pub fn move_eye(&mut self, axis: Axis, sign: Sign) {
        self.eye += axis.unit() * (sign.factor() * interaction::EYE_STEP);
    }

    /// Rotate the look-direction offset about the vertical axis through the
    /// eye by the fixed look angle.
    pub fn yaw(&mut self, sign: Sign) {
        let angle = sign.factor() * interaction::LOOK_STEP;
        self.at = rotate_about(self.at, self.eye, Mat3::from_rotation_y(angle));
    }

    /// Rotate the look-direction offset and the up vector about the
    /// horizontal axis through the eye by the fixed look angle.
    pub fn pitch(&mut self, sign: Sign) {
        let angle = sign.factor() * interaction::LOOK_STEP;
        let rotation = Mat3::from_rotation_x(angle);
        self.at = rotate_about(self.at, self.eye, rotation);
        self.up = rotate_about(self.up, self.eye, rotation);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Rotate `point` about the axis line through `pivot`.
fn rotate_about(point: Vec3, pivot: Vec3, rotation: Mat3) -> Vec3 {
    pivot + rotation * (point - pivot)
}
