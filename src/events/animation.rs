//! Animation completion notification.
//!
//! The [`animation`](crate::systems::animation::animation) system triggers an
//! [`AnimationCompleteEvent`] the first frame a non-looping animation runs past
//! its last frame. It fires once per playback; replaying the animation arms it
//! again.
use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct AnimationCompleteEvent {
    pub entity: Entity,
    pub animation_key: String,
}
