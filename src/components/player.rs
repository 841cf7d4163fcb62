//! Player control state.
//!
//! The [`PlayerController`] component marks the single player entity and
//! holds the state machine driven by
//! [`player_controller`](crate::systems::gameloop::player_controller):
//!
//! ```text
//! Standing --left/right held--> Walking --nothing held--> Standing
//!     \                            |
//!      \--attack held--> Attacking <--attack held
//!                          |
//!                          '--"hit" animation complete--> Standing
//! ```
use bevy_ecs::prelude::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Standing,
    Walking,
    Attacking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

#[derive(Component, Debug, Clone, Default)]
pub struct PlayerController {
    pub state: PlayerState,
    pub facing: Facing,
    /// True from the start of an attack until its animation completes.
    pub attacking: bool,
}

impl PlayerController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Attacking`. Returns false if an attack was already in progress.
    pub fn begin_attack(&mut self) -> bool {
        if self.attacking {
            return false;
        }
        self.attacking = true;
        self.state = PlayerState::Attacking;
        true
    }

    /// Leave `Attacking` for `Standing`. Returns false if not attacking.
    pub fn finish_attack(&mut self) -> bool {
        if !self.attacking {
            return false;
        }
        self.attacking = false;
        self.state = PlayerState::Standing;
        true
    }
}
