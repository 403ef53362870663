//! Keyboard input as pure scene transitions
//!
//! Key handling never touches the renderer: an [`InputEvent`] maps a
//! [`Scene`] to its next state through [`apply_input_event`].
//!
//! Bindings:
//! - Space (press): select the next object
//! - Escape (press): request quit
//! - X / Y / Z (repeat): rotate the selected object about that axis
//! - W / S, A / D, Q / E (press): translate the selected object along Y, X, Z
//! - Numpad + / - (press): grow or shrink the selected object
//! - Arrow keys (repeat): move the camera

use std::str::FromStr;

use glam::Vec3;
use thiserror::Error;

use super::{Placement, Scene};

/// Radians added per rotate event
pub const ROTATION_STEP: f32 = 0.1;
/// World units per translate event
pub const TRANSLATION_STEP: f32 = 1.0;
/// Scale change per grow/shrink event
pub const SCALE_STEP: f32 = 0.1;
/// World units per camera move event
pub const CAMERA_SPEED: f32 = 0.1;

/// Keys the scene responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    A,
    D,
    E,
    Q,
    S,
    W,
    X,
    Y,
    Z,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Escape,
    NumpadAdd,
    NumpadSubtract,
}

impl KeyCode {
    /// Action that triggers this key's binding
    pub fn bound_action(&self) -> KeyAction {
        match self {
            KeyCode::X
            | KeyCode::Y
            | KeyCode::Z
            | KeyCode::ArrowUp
            | KeyCode::ArrowDown
            | KeyCode::ArrowLeft
            | KeyCode::ArrowRight => KeyAction::Repeat,
            _ => KeyAction::Press,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown key name: {0:?}")]
pub struct UnknownKey(pub String);

impl FromStr for KeyCode {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.to_ascii_lowercase().as_str() {
            "a" => KeyCode::A,
            "d" => KeyCode::D,
            "e" => KeyCode::E,
            "q" => KeyCode::Q,
            "s" => KeyCode::S,
            "w" => KeyCode::W,
            "x" => KeyCode::X,
            "y" => KeyCode::Y,
            "z" => KeyCode::Z,
            "up" => KeyCode::ArrowUp,
            "down" => KeyCode::ArrowDown,
            "left" => KeyCode::ArrowLeft,
            "right" => KeyCode::ArrowRight,
            "space" => KeyCode::Space,
            "escape" | "esc" => KeyCode::Escape,
            "plus" | "+" => KeyCode::NumpadAdd,
            "minus" | "-" => KeyCode::NumpadSubtract,
            _ => return Err(UnknownKey(s.to_string())),
        };
        Ok(key)
    }
}

/// Key state transition as reported by the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: KeyCode,
    pub action: KeyAction,
}

impl InputEvent {
    pub fn new(key: KeyCode, action: KeyAction) -> Self {
        Self { key, action }
    }

    pub fn press(key: KeyCode) -> Self {
        Self::new(key, KeyAction::Press)
    }

    pub fn repeat(key: KeyCode) -> Self {
        Self::new(key, KeyAction::Repeat)
    }

    /// Event that fires the key's binding
    pub fn trigger(key: KeyCode) -> Self {
        Self::new(key, key.bound_action())
    }
}

/// Apply one input event and return the resulting scene
pub fn apply_input_event(mut scene: Scene, event: InputEvent) -> Scene {
    use KeyAction::{Press, Repeat};

    match (event.key, event.action) {
        (KeyCode::Space, Press) => scene.select_next(),
        (KeyCode::Escape, Press) => scene.quit_requested = true,

        (KeyCode::X, Repeat) => edit_selected(&mut scene, |p| p.rotate(Vec3::X * ROTATION_STEP)),
        (KeyCode::Y, Repeat) => edit_selected(&mut scene, |p| p.rotate(Vec3::Y * ROTATION_STEP)),
        (KeyCode::Z, Repeat) => edit_selected(&mut scene, |p| p.rotate(Vec3::Z * ROTATION_STEP)),

        (KeyCode::W, Press) => edit_selected(&mut scene, |p| p.translate(Vec3::Y * TRANSLATION_STEP)),
        (KeyCode::S, Press) => edit_selected(&mut scene, |p| p.translate(Vec3::NEG_Y * TRANSLATION_STEP)),
        (KeyCode::A, Press) => edit_selected(&mut scene, |p| p.translate(Vec3::NEG_X * TRANSLATION_STEP)),
        (KeyCode::D, Press) => edit_selected(&mut scene, |p| p.translate(Vec3::X * TRANSLATION_STEP)),
        (KeyCode::Q, Press) => edit_selected(&mut scene, |p| p.translate(Vec3::NEG_Z * TRANSLATION_STEP)),
        (KeyCode::E, Press) => edit_selected(&mut scene, |p| p.translate(Vec3::Z * TRANSLATION_STEP)),

        (KeyCode::NumpadAdd, Press) => edit_selected(&mut scene, |p| p.grow(SCALE_STEP)),
        (KeyCode::NumpadSubtract, Press) => edit_selected(&mut scene, |p| p.grow(-SCALE_STEP)),

        (KeyCode::ArrowUp, Repeat) => scene.camera_mut().move_forward(CAMERA_SPEED),
        (KeyCode::ArrowDown, Repeat) => scene.camera_mut().move_forward(-CAMERA_SPEED),
        (KeyCode::ArrowLeft, Repeat) => scene.camera_mut().move_right(-CAMERA_SPEED),
        (KeyCode::ArrowRight, Repeat) => scene.camera_mut().move_right(CAMERA_SPEED),

        _ => {}
    }

    scene
}

/// Mutate the selected object's placement unless it follows the curve
fn edit_selected(scene: &mut Scene, edit: impl FnOnce(&mut Placement)) {
    let Some((id, object)) = scene.selected_object_mut() else {
        return;
    };
    if object.placement.movable {
        log::debug!("Ignoring input for movable object {id:?}");
        return;
    }
    edit(&mut object.placement);
}
