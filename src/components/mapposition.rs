//! World-space position of an entity.
//!
//! The position is the entity's pivot: sprites are drawn centred on it and
//! [`BoxCollider`](super::boxcollider::BoxCollider) offsets are relative to it.
use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}
