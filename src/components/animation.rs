//! Sprite animation playback state.
//!
//! - [`Animation`] tracks which animation from the
//!   [`AnimationStore`](crate::resources::animationstore::AnimationStore) an
//!   entity is playing and how far along it is.
//! - [`AnimationSubscription`] is a one-shot subscription to the completion of
//!   a named animation. The completion observer removes it the first time the
//!   matching [`AnimationCompleteEvent`](crate::events::animation::AnimationCompleteEvent)
//!   fires for the entity.
use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    /// Seconds spent on the current frame.
    pub elapsed_time: f32,
    /// Set once a non-looping animation has run past its last frame.
    pub finished: bool,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
            finished: false,
        }
    }

    /// Start playing `key` from its first frame.
    ///
    /// If `key` is already playing and has not finished, nothing changes.
    /// Returns whether playback was (re)started.
    pub fn play(&mut self, key: &str) -> bool {
        if self.animation_key == key && !self.finished {
            return false;
        }
        self.animation_key = key.to_string();
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        self.finished = false;
        true
    }

}

#[derive(Debug, Clone, PartialEq, Eq, Component)]
pub struct AnimationSubscription {
    pub animation_key: String,
}

impl AnimationSubscription {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
        }
    }
}
