//! Audio command bus.
//!
//! Game systems write [`AudioCmd`] messages; the window build forwards them to
//! the background audio thread, which answers with [`AudioMessage`]s. Headless
//! runs and tests simply read the command messages.
use bevy_ecs::message::Message;

/// Music stream ids and sound effect ids used by the game.
pub const MUSIC_BACKGROUND: &str = "background_music";
pub const MUSIC_WALK: &str = "walk";
pub const FX_HIT: &str = "hit";

/// Commands sent *to* the audio thread.
///
/// Looping sounds (walking, background music) are music streams; one-shot
/// sounds are effects.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    VolumeMusic { id: String, vol: f32 },
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    VolumeFx { id: String, vol: f32 },
    Shutdown,
}

/// Events sent *back* from the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    MusicStopped { id: String },
    MusicFinished { id: String },
    MusicUnloadedAll,
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
    FxFinished { id: String },
    FxUnloadedAll,
}
