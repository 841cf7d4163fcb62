//! Audio resources.
//!
//! - [`AudioBridge`] connects the ECS world with the background audio thread.
//!   Use [`setup_audio`] once during initialization and [`shutdown_audio`]
//!   during teardown.
//! - [`LoopingSounds`] remembers which looping streams the game has started so
//!   per-frame "keep playing" requests only emit a command on change.

use crate::events::audio::{AudioCmd, AudioMessage};
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use rustc_hash::FxHashSet;

/// Shared bridge between the ECS world and the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Receiver for [`AudioMessage`] messages (audio thread -> ECS).
    pub rx_msg: Receiver<AudioMessage>,
    /// Join handle for the background audio thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn `worker` on its own thread and register bridge resources.
///
/// Inserts [`AudioBridge`], `Messages<AudioCmd>` and `Messages<AudioMessage>`.
pub fn setup_audio_with<F>(world: &mut World, worker: F)
where
    F: FnOnce(Receiver<AudioCmd>, Sender<AudioMessage>) + Send + 'static,
{
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let handle = std::thread::spawn(move || worker(rx_cmd, tx_msg));

    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
    world.init_resource::<Messages<AudioMessage>>();
    world.init_resource::<Messages<AudioCmd>>();
}

/// Spawn the raylib audio thread and register bridge resources.
#[cfg(feature = "raylib")]
pub fn setup_audio(world: &mut World) {
    setup_audio_with(world, crate::systems::audio::audio_thread);
}

/// Gracefully request shutdown of the audio thread and join it.
///
/// If the bridge resource exists, sends [`AudioCmd::Shutdown`], waits for the
/// thread to exit, and removes the resource from the world.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        if bridge.handle.join().is_err() {
            log::error!("audio thread panicked");
        }
    }
}

/// Looping music streams the game believes are playing.
#[derive(Resource, Debug, Default)]
pub struct LoopingSounds {
    playing: FxHashSet<String>,
}

impl LoopingSounds {
    /// Returns the command to send if `id` is not already playing.
    pub fn start(&mut self, id: &str) -> Option<AudioCmd> {
        if self.playing.insert(id.to_string()) {
            Some(AudioCmd::PlayMusic {
                id: id.to_string(),
                looped: true,
            })
        } else {
            None
        }
    }

    /// Returns the command to send if `id` is playing.
    pub fn stop(&mut self, id: &str) -> Option<AudioCmd> {
        if self.playing.remove(id) {
            Some(AudioCmd::StopMusic { id: id.to_string() })
        } else {
            None
        }
    }
}
