//! Components for the boxes drawn by the pencil.
use bevy_ecs::prelude::Component;

/// Marker for a box spawned by the pencil.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct DrawnBox;

/// A destruction task has already been scheduled for this box.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct PendingDestroy;
