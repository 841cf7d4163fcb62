//! World rectangle that bodies with
//! [`CollideWorldBounds`](crate::components::collideworldbounds::CollideWorldBounds)
//! are kept inside.
use bevy_ecs::prelude::Resource;
use glam::Vec2;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl WorldBounds {
    /// Bounds spanning `(0, 0)` to `(width, height)`.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}
