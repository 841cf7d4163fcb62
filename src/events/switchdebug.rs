//! Toggle for the debug overlay.
//!
//! Triggering a [`SwitchDebugEvent`] flips the presence of the [`DebugMode`]
//! resource, which the renderer checks before outlining colliders.
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent;

/// Insert [`DebugMode`] if absent, remove it if present.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    if debug_mode.is_some() {
        commands.remove_resource::<DebugMode>();
        log::info!("Debug mode disabled");
    } else {
        commands.insert_resource(DebugMode);
        log::info!("Debug mode enabled");
    }
}
