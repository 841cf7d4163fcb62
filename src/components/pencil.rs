use bevy_ecs::prelude::Component;

/// Marker for the floating pencil that draws boxes.
///
/// The pencil has no gravity; its x position is set by the
/// [`TimerAction::MovePencil`](super::timer::TimerAction::MovePencil) task and
/// its y position never changes.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Pencil;
