//! Debug overlay toggle.
//!
//! While this resource is present the renderer outlines every
//! [`BoxCollider`](crate::components::boxcollider::BoxCollider) and prints the
//! player state. F11 inserts or removes it.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode;
