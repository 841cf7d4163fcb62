use bevy_ecs::prelude::Component;

/// Marker: the movement system keeps this entity's
/// [`BoxCollider`](super::boxcollider::BoxCollider) inside the
/// [`WorldBounds`](crate::resources::worldbounds::WorldBounds).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CollideWorldBounds;
