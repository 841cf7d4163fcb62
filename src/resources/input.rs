//! Per-frame keyboard input resource.
//!
//! Captures the keys the game cares about and exposes them to systems via the
//! [`InputState`] resource. The window build fills it from raylib each frame
//! (see `systems::input`); tests write it directly.
use bevy_ecs::prelude::*;

/// Keys the game can bind an action to.
///
/// Kept independent of the windowing backend so the game logic can be driven
/// headless; the raylib input system maps these to `KeyboardKey`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    None,
    Left,
    Right,
    Space,
    F11,
}

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: InputKey,
}

impl BoolState {
    pub fn bound_to(key_binding: InputKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }

    /// Record this frame's held state, deriving the edge flags from the
    /// previous frame.
    pub fn update(&mut self, held: bool) {
        self.just_pressed = held && !self.active;
        self.just_released = !held && self.active;
        self.active = held;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(InputKey::None)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub attack: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: BoolState::bound_to(InputKey::Left),
            right: BoolState::bound_to(InputKey::Right),
            attack: BoolState::bound_to(InputKey::Space),
            mode_debug: BoolState::bound_to(InputKey::F11),
        }
    }
}
