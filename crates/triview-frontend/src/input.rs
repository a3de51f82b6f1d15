//! Keyboard dispatch table.

use triview_core::{Axis, Command, Sign};

/// Map one key event to its command.
///
/// The table distinguishes shifted keys: unshifted letters move the eye or
/// translate the selection, shifted letters turn the look direction or
/// rotate the selection. Keys outside the table map to nothing.
pub fn map_key(key: egui::Key, shift: bool) -> Option<Command> {
    use egui::Key;

    let command = match (key, shift) {
        // Eye movement.
        (Key::A, false) => Command::MoveEye(Axis::X, Sign::Pos),
        (Key::D, false) => Command::MoveEye(Axis::X, Sign::Neg),
        (Key::W, false) => Command::MoveEye(Axis::Z, Sign::Pos),
        (Key::S, false) => Command::MoveEye(Axis::Z, Sign::Neg),
        (Key::Q, false) => Command::MoveEye(Axis::Y, Sign::Pos),
        (Key::E, false) => Command::MoveEye(Axis::Y, Sign::Neg),

        // Look rotation about the eye.
        (Key::A, true) => Command::Yaw(Sign::Pos),
        (Key::D, true) => Command::Yaw(Sign::Neg),
        (Key::W, true) => Command::Pitch(Sign::Pos),
        (Key::S, true) => Command::Pitch(Sign::Neg),

        // Selection.
        (Key::ArrowRight, _) => Command::CycleNext,
        (Key::ArrowLeft, _) => Command::CyclePrevious,
        (Key::Space, _) => Command::Deselect,

        // Translate the selected mesh.
        (Key::K, false) => Command::Translate(Axis::X, Sign::Pos),
        (Key::Semicolon, false) => Command::Translate(Axis::X, Sign::Neg),
        (Key::O, false) => Command::Translate(Axis::Z, Sign::Pos),
        (Key::L, false) => Command::Translate(Axis::Z, Sign::Neg),
        (Key::I, false) => Command::Translate(Axis::Y, Sign::Pos),
        (Key::P, false) => Command::Translate(Axis::Y, Sign::Neg),

        // Rotate the selected mesh about its centroid.
        (Key::K, true) => Command::Rotate(Axis::Y, Sign::Pos),
        (Key::Semicolon, true) | (Key::Colon, _) => Command::Rotate(Axis::Y, Sign::Neg),
        (Key::O, true) => Command::Rotate(Axis::X, Sign::Pos),
        (Key::L, true) => Command::Rotate(Axis::X, Sign::Neg),
        (Key::I, true) => Command::Rotate(Axis::Z, Sign::Pos),
        (Key::P, true) => Command::Rotate(Axis::Z, Sign::Neg),

        _ => return None,
    };
    Some(command)
}
