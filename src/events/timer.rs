//! Scheduled task firings.
//!
//! When a [`Timer`](crate::components::timer::Timer) reaches its duration, a
//! [`TimerEvent`] carrying the timer's action is triggered. The game loop's
//! timer observer applies the action.

use bevy_ecs::prelude::*;

use crate::components::timer::TimerAction;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TimerEvent {
    /// The timer entity (task id) that fired.
    pub entity: Entity,
    pub action: TimerAction,
}
