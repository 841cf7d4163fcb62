//! Keyboard input.
//!
//! [`update_input_state`] reads raylib's keyboard each frame and writes the
//! held/edge state of every bound key into
//! [`InputState`](crate::resources::input::InputState). F11 triggers
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputKey, InputState};

fn keyboard_key(key: InputKey) -> Option<KeyboardKey> {
    match key {
        InputKey::None => None,
        InputKey::Left => Some(KeyboardKey::KEY_LEFT),
        InputKey::Right => Some(KeyboardKey::KEY_RIGHT),
        InputKey::Space => Some(KeyboardKey::KEY_SPACE),
        InputKey::F11 => Some(KeyboardKey::KEY_F11),
    }
}

fn poll(state: &mut BoolState, rl: &raylib::RaylibHandle) {
    let held = keyboard_key(state.key_binding)
        .map(|key| rl.is_key_down(key))
        .unwrap_or(false);
    state.update(held);
}

/// Poll raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    poll(&mut input.left, &rl);
    poll(&mut input.right, &rl);
    poll(&mut input.attack, &rl);
    poll(&mut input.mode_debug, &rl);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent);
    }
}
