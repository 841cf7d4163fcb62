//! Scheduled task countdown.
//!
//! [`update_timers`] advances every [`Timer`] by the frame delta and triggers
//! a [`TimerEvent`] for each one that fires. One-shot timers are despawned
//! after firing; repeating ones keep running forever.
use bevy_ecs::prelude::*;

use crate::components::timer::Timer;
use crate::events::timer::TimerEvent;
use crate::resources::rng::GameRng;
use crate::resources::worldtime::WorldTime;

pub fn update_timers(
    world_time: Res<WorldTime>,
    mut rng: ResMut<GameRng>,
    mut query: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        if !timer.tick(world_time.delta, &mut rng.0) {
            continue;
        }
        commands.trigger(TimerEvent {
            entity,
            action: timer.action.clone(),
        });
        if !timer.repeat {
            commands.entity(entity).despawn();
        }
    }
}
