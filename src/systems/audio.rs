//! Audio systems backed by a dedicated thread.
//!
//! - [`audio_thread`] (window build only) runs on its own OS thread, owns the
//!   raylib audio device, and processes [`AudioCmd`] messages, answering with
//!   [`AudioMessage`]s.
//! - [`poll_audio_messages`] non-blockingly drains the audio thread's replies
//!   into the ECS message queue each frame.
//! - [`forward_audio_cmds`] sends the frame's [`AudioCmd`] messages to the
//!   audio thread.
//! - [`update_bevy_audio_messages`] and [`update_bevy_audio_cmds`] advance
//!   the ECS message queues.
//!
//! Raylib audio calls stay on one thread; the game thread only talks to it
//! through channels. See [`crate::resources::audio`] for setup and shutdown.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::*;

/// Drain pending replies from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward this frame's [`AudioCmd`] messages to the audio thread.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // send only fails after the thread has exited
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`].
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Report audio failures. A missing sound file only costs that sound; the game
/// keeps running.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicLoadFailed { id, error } => {
                log::warn!("music '{}' failed to load: {}", id, error);
            }
            AudioMessage::FxLoadFailed { id, error } => {
                log::warn!("sound '{}' failed to load: {}", id, error);
            }
            other => log::trace!("audio: {:?}", other),
        }
    }
}

/// Entry point of the dedicated audio thread.
///
/// Owns every `Music` and `Sound` handle, reacts to [`AudioCmd`]s, pumps the
/// playing music streams, and restarts looped ones when they end. Blocks until
/// [`AudioCmd::Shutdown`] arrives.
#[cfg(feature = "raylib")]
pub fn audio_thread(
    rx_cmd: crossbeam_channel::Receiver<AudioCmd>,
    tx_evt: crossbeam_channel::Sender<AudioMessage>,
) {
    use raylib::core::audio::{Music, RaylibAudio, Sound};
    use rustc_hash::{FxHashMap, FxHashSet};

    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            log::error!("failed to initialize audio device: {}", e);
            // Keep draining so senders never block and shutdown still joins.
            for cmd in rx_cmd.iter() {
                if cmd == AudioCmd::Shutdown {
                    break;
                }
            }
            return;
        }
    };

    log::debug!("audio thread starting ({:?})", std::thread::current().id());

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();
    let mut fx_playing: FxHashSet<String> = FxHashSet::default();

    'run: loop {
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        log::info!("loaded music '{}' from {}", id, path);
                        musics.insert(id.clone(), music);
                        let _ = tx_evt.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_evt.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: format!("{} ({})", e, path),
                        });
                    }
                },
                AudioCmd::PlayMusic {
                    id,
                    looped: want_loop,
                } => {
                    if let Some(music) = musics.get(&id) {
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id.clone());
                        } else {
                            looped.remove(&id);
                        }
                        let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id });
                    }
                }
                AudioCmd::StopMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        music.stop_stream();
                        playing.remove(&id);
                        looped.remove(&id);
                        let _ = tx_evt.send(AudioMessage::MusicStopped { id });
                    }
                }
                AudioCmd::VolumeMusic { id, vol } => {
                    if let Some(music) = musics.get(&id) {
                        music.set_volume(vol);
                    }
                }
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        log::info!("loaded sound '{}' from {}", id, path);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_evt.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                            id,
                            error: format!("{} ({})", e, path),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        sound.play();
                        fx_playing.insert(id);
                    } else {
                        log::debug!("sound '{}' not loaded, skipping", id);
                    }
                }
                AudioCmd::VolumeFx { id, vol } => {
                    if let Some(sound) = sounds.get(&id) {
                        sound.set_volume(vol);
                    }
                }
                AudioCmd::Shutdown => {
                    log::debug!("audio shutdown requested");
                    musics.clear();
                    playing.clear();
                    looped.clear();
                    let _ = tx_evt.send(AudioMessage::MusicUnloadedAll);
                    sounds.clear();
                    fx_playing.clear();
                    let _ = tx_evt.send(AudioMessage::FxUnloadedAll);
                    break 'run;
                }
            }
        }

        // Streams need update_stream() while playing. A stream that stopped on
        // its own has ended: restart it if looped, otherwise report once.
        let mut ended: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else if music.get_time_played() >= music.get_time_length() - 0.01 {
                    ended.push(id.clone());
                }
            }
        }
        for id in ended {
            if looped.contains(&id) {
                if let Some(music) = musics.get(&id) {
                    music.seek_stream(0.0);
                    music.play_stream();
                }
            } else {
                playing.remove(&id);
                let _ = tx_evt.send(AudioMessage::MusicFinished { id });
            }
        }

        let fx_ended: Vec<String> = fx_playing
            .iter()
            .filter(|id| !sounds.get(*id).map(|s| s.is_playing()).unwrap_or(false))
            .cloned()
            .collect();
        for id in fx_ended {
            fx_playing.remove(&id);
            let _ = tx_evt.send(AudioMessage::FxFinished { id });
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    log::debug!("audio thread exiting ({:?})", std::thread::current().id());
    // musics and sounds drop before `audio`
}
