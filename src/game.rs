//! Session setup and the per-frame schedule.
//!
//! The binary (and the integration tests) build a game in four steps:
//!
//! 1. [`setup_world`] inserts the shared resources.
//! 2. [`register_observers`] installs the observers that react to timer
//!    firings, animation completion and the debug toggle.
//! 3. [`spawn_session`] creates the background, player, pencil and the two
//!    repeating timers, and inserts the [`GameSession`].
//! 4. [`build_update_schedule`] returns the ordered per-frame schedule, run
//!    once per frame after [`update_world_time`].
use std::path::Path;

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::collideworldbounds::CollideWorldBounds;
use crate::components::mapposition::MapPosition;
use crate::components::pencil::Pencil;
use crate::components::player::PlayerController;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::timer::{Timer, TimerAction, TimerDelay};
use crate::components::zindex::ZIndex;
use crate::events::audio::{AudioCmd, FX_HIT, MUSIC_BACKGROUND, MUSIC_WALK};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::animationstore::{ANIM_STAND, AnimationStore};
use crate::resources::audio::LoopingSounds;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;
use crate::resources::session::GameSession;
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::audio::update_bevy_audio_cmds;
use crate::systems::gameloop::{attack_complete_observer, player_controller, timer_observer};
use crate::systems::movement::movement;
use crate::systems::time::update_world_time;
use crate::systems::timer::update_timers;

pub const BACKGROUND_TEXTURE: &str = "notebook";
pub const PENCIL_TEXTURE: &str = "pencil";

pub const PLAYER_START: Vec2 = Vec2::new(100.0, 450.0);
/// Player collider, centred on its position.
pub const PLAYER_COLLIDER: Vec2 = Vec2::new(15.0, 90.0);
pub const CHARACTER_SCALE: f32 = 1.5;

/// Insert the shared resources. An [`AnimationStore`] already present (loaded
/// from disk by the caller) is kept; otherwise the built-in one is used.
pub fn setup_world(world: &mut World, config: GameConfig, rng: GameRng) {
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WorldBounds::new(
        config.window_width as f32,
        config.window_height as f32,
    ));
    world.insert_resource(InputState::default());
    if !world.contains_resource::<AnimationStore>() {
        world.insert_resource(AnimationStore::with_defaults());
    }
    world.insert_resource(LoopingSounds::default());
    world.init_resource::<Messages<AudioCmd>>();
    world.insert_resource(config);
    world.insert_resource(rng);
}

/// Load animation definitions from `path`, falling back to the built-in set.
pub fn load_animations(path: impl AsRef<Path>) -> AnimationStore {
    let path = path.as_ref();
    match AnimationStore::load_json(path) {
        Ok(store) => {
            log::info!("Loaded animations from {}", path.display());
            store
        }
        Err(e) => {
            log::warn!("{}; using built-in animations", e);
            AnimationStore::with_defaults()
        }
    }
}

/// Queue loading of every sound under `assets_dir/sounds` and apply the
/// configured volumes.
pub fn load_audio(world: &mut World, assets_dir: &Path) {
    let config = world.resource::<GameConfig>().clone();
    let sound = |file: &str| {
        assets_dir
            .join("sounds")
            .join(file)
            .to_string_lossy()
            .into_owned()
    };
    let mut msgs = world.resource_mut::<Messages<AudioCmd>>();
    msgs.write(AudioCmd::LoadMusic {
        id: MUSIC_BACKGROUND.into(),
        path: sound("background-music.mp3"),
    });
    msgs.write(AudioCmd::LoadMusic {
        id: MUSIC_WALK.into(),
        path: sound("walk.mp3"),
    });
    msgs.write(AudioCmd::LoadFx {
        id: FX_HIT.into(),
        path: sound("hit.mp3"),
    });
    msgs.write(AudioCmd::VolumeMusic {
        id: MUSIC_BACKGROUND.into(),
        vol: config.music_volume,
    });
    msgs.write(AudioCmd::VolumeMusic {
        id: MUSIC_WALK.into(),
        vol: config.walk_volume,
    });
    msgs.write(AudioCmd::VolumeFx {
        id: FX_HIT.into(),
        vol: config.hit_volume,
    });
}

pub fn register_observers(world: &mut World) {
    world.add_observer(attack_complete_observer);
    world.add_observer(timer_observer);
    world.add_observer(switch_debug_observer);
}

/// Spawn the session's entities and insert [`GameSession`].
///
/// Requires [`setup_world`] to have run.
pub fn spawn_session(world: &mut World) -> GameSession {
    let config = world.resource::<GameConfig>().clone();
    let bounds = *world.resource::<WorldBounds>();

    world.spawn((
        MapPosition { pos: bounds.center() },
        Sprite::new(BACKGROUND_TEXTURE, bounds.width(), bounds.height()),
        ZIndex(-1),
    ));

    let player = world
        .spawn((
            PlayerController::new(),
            MapPosition { pos: PLAYER_START },
            RigidBody::new().with_gravity(config.player_gravity),
            BoxCollider::centered(PLAYER_COLLIDER.x, PLAYER_COLLIDER.y),
            CollideWorldBounds,
            Sprite::new(ANIM_STAND, 64.0, 64.0).with_scale(CHARACTER_SCALE),
            Animation::new(ANIM_STAND),
            ZIndex(3),
        ))
        .id();

    let pencil = world
        .spawn((
            Pencil,
            MapPosition {
                pos: Vec2::new(bounds.center().x, config.pencil_y),
            },
            Sprite::new(PENCIL_TEXTURE, 32.0, 32.0).with_scale(CHARACTER_SCALE),
            ZIndex(2),
        ))
        .id();

    let (spawn_timer, pencil_timer) = {
        let mut rng = world.resource_mut::<GameRng>();
        (
            Timer::repeating(
                TimerDelay::Fixed(config.box_spawn_interval()),
                TimerAction::SpawnBox,
                &mut rng.0,
            ),
            Timer::repeating(
                TimerDelay::RandomBetween {
                    min_ms: config.pencil_min_interval_ms,
                    max_ms: config.pencil_max_interval_ms,
                },
                TimerAction::MovePencil,
                &mut rng.0,
            ),
        )
    };
    world.spawn(spawn_timer);
    world.spawn(pencil_timer);

    let music = world
        .resource_mut::<LoopingSounds>()
        .start(MUSIC_BACKGROUND);
    if let Some(cmd) = music {
        world.resource_mut::<Messages<AudioCmd>>().write(cmd);
    }

    let session = GameSession::new(player, pencil);
    world.insert_resource(session.clone());
    log::info!("Session started: player {:?}, pencil {:?}", player, pencil);
    session
}

/// The per-frame update, in order:
/// `update_timers -> player_controller -> movement -> animation`, followed by
/// the audio command queue flip.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            update_timers,
            player_controller,
            movement,
            animation,
            update_bevy_audio_cmds,
        )
            .chain(),
    );
    update
}

/// Advance the clock by `dt` seconds and run one frame.
pub fn run_frame(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}
