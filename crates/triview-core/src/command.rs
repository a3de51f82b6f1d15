//! Input commands and their dispatch.
//!
//! Every discrete key event is mapped (by the frontend) to exactly one
//! [`Command`]. The enum is closed: adding an interaction means adding a
//! variant here and an arm in [`apply_command`], not another key branch.

use crate::camera::Camera;
use crate::scene::SceneModel;

/// A world axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along the axis.
    pub fn unit(self) -> glam::Vec3 {
        match self {
            Axis::X => glam::Vec3::X,
            Axis::Y => glam::Vec3::Y,
            Axis::Z => glam::Vec3::Z,
        }
    }

    /// Rotation by `angle` radians about the axis.
    pub fn rotation(self, angle: f32) -> glam::Mat4 {
        match self {
            Axis::X => glam::Mat4::from_rotation_x(angle),
            Axis::Y => glam::Mat4::from_rotation_y(angle),
            Axis::Z => glam::Mat4::from_rotation_z(angle),
        }
    }
}

/// Direction of a step or rotation along/about an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    /// `+1.0` or `-1.0`.
    pub fn factor(self) -> f32 {
        match self {
            Sign::Pos => 1.0,
            Sign::Neg => -1.0,
        }
    }
}

/// Direction of a selection-cycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Next,
    Previous,
}

/// One discrete input command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Translate the camera eye along a world axis.
    MoveEye(Axis, Sign),
    /// Rotate the look direction about the vertical axis through the eye.
    Yaw(Sign),
    /// Rotate the look direction and up vector about the horizontal axis
    /// through the eye.
    Pitch(Sign),
    /// Move the selection cursor to the next mesh.
    CycleNext,
    /// Move the selection cursor to the previous mesh.
    CyclePrevious,
    /// Clear the selection.
    Deselect,
    /// Translate the selected mesh along an axis.
    Translate(Axis, Sign),
    /// Rotate the selected mesh about its own centroid.
    Rotate(Axis, Sign),
}

/// Apply one command to the viewer state.
///
/// This is the whole interaction state machine: camera commands mutate only
/// the camera, selection/transform commands mutate only the scene, and every
/// command is total; commands that need a selection do nothing without one.
pub fn apply_command(command: Command, scene: &mut SceneModel, camera: &mut Camera) {
    tracing::debug!(?command, "applying input command");
    match command {
        Command::MoveEye(axis, sign) => camera.move_eye(axis, sign),
        Command::Yaw(sign) => camera.yaw(sign),
        Command::Pitch(sign) => camera.pitch(sign),
        Command::CycleNext => scene.cycle_selection(CycleDirection::Next),
        Command::CyclePrevious => scene.cycle_selection(CycleDirection::Previous),
        Command::Deselect => scene.clear_selection(),
        Command::Translate(axis, sign) => scene.translate_selection(axis, sign),
        Command::Rotate(axis, sign) => scene.rotate_selection(axis, sign),
    }
}
