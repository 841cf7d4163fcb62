//! Game loop integration tests.
//!
//! Each test builds the real session (resources, observers, entities and the
//! per-frame schedule) and drives it frame by frame with a fixed delta, writing
//! the keyboard state directly into `InputState`.

use bevy_ecs::prelude::*;
use glam::Vec2;

use notebookbrawl::components::animation::{Animation, AnimationSubscription};
use notebookbrawl::components::drawnbox::{DrawnBox, PendingDestroy};
use notebookbrawl::components::mapposition::MapPosition;
use notebookbrawl::components::player::{Facing, PlayerController, PlayerState};
use notebookbrawl::components::rigidbody::RigidBody;
use notebookbrawl::components::sprite::Sprite;
use notebookbrawl::components::timer::{Timer, TimerAction};
use notebookbrawl::events::audio::{AudioCmd, FX_HIT, MUSIC_BACKGROUND, MUSIC_WALK};
use notebookbrawl::events::timer::TimerEvent;
use notebookbrawl::game::{
    build_update_schedule, load_animations, register_observers, run_frame, setup_world,
    spawn_session,
};
use notebookbrawl::resources::gameconfig::GameConfig;
use notebookbrawl::resources::input::InputState;
use notebookbrawl::resources::rng::GameRng;
use notebookbrawl::resources::session::GameSession;
use notebookbrawl::systems::animation::animation;
use notebookbrawl::systems::audio::update_bevy_audio_cmds;
use notebookbrawl::systems::gameloop::box_bundle;

/// A power of two, so accumulated frame time stays exact.
const DT: f32 = 1.0 / 64.0;

#[derive(Resource, Default)]
struct AudioLog(Vec<AudioCmd>);

fn record_audio(mut reader: MessageReader<AudioCmd>, mut log: ResMut<AudioLog>) {
    log.0.extend(reader.read().cloned());
}

struct Game {
    world: World,
    update: Schedule,
    player: Entity,
    pencil: Entity,
}

impl Game {
    fn start(seed: u64) -> Self {
        Self::start_with(seed, World::new())
    }

    /// Start a session in `world`, keeping any resources already inserted.
    fn start_with(seed: u64, mut world: World) -> Self {
        setup_world(&mut world, GameConfig::new(), GameRng::with_seed(seed));
        world.init_resource::<AudioLog>();
        register_observers(&mut world);
        let session = spawn_session(&mut world);

        let mut update = build_update_schedule();
        update.add_systems(record_audio.after(animation).before(update_bevy_audio_cmds));

        Self {
            world,
            update,
            player: session.player,
            pencil: session.pencil,
        }
    }

    fn hold(&mut self, left: bool, right: bool, attack: bool) {
        let mut input = self.world.resource_mut::<InputState>();
        input.left.update(left);
        input.right.update(right);
        input.attack.update(attack);
    }

    fn frames(&mut self, n: usize) {
        for _ in 0..n {
            run_frame(&mut self.world, &mut self.update, DT);
        }
    }

    fn ctrl(&self) -> &PlayerController {
        self.world.get::<PlayerController>(self.player).unwrap()
    }

    fn velocity_x(&self) -> f32 {
        self.world.get::<RigidBody>(self.player).unwrap().velocity.x
    }

    fn animation_key(&self) -> &str {
        &self
            .world
            .get::<Animation>(self.player)
            .unwrap()
            .animation_key
    }

    fn session(&self) -> &GameSession {
        self.world.resource::<GameSession>()
    }

    /// Spawn a box on top of the player and register it as live.
    fn box_on_player(&mut self) -> Entity {
        let at = self.world.get::<MapPosition>(self.player).unwrap().pos;
        self.box_at(at)
    }

    fn box_at(&mut self, at: Vec2) -> Entity {
        let config = self.world.resource::<GameConfig>().clone();
        let entity = self.world.spawn(box_bundle(at, &config)).id();
        self.world.resource_mut::<GameSession>().boxes.push(entity);
        entity
    }

    fn audio(&self) -> &[AudioCmd] {
        &self.world.resource::<AudioLog>().0
    }

    fn played_fx(&self, id: &str) -> usize {
        self.audio()
            .iter()
            .filter(|cmd| matches!(cmd, AudioCmd::PlayFx { id: fx } if fx == id))
            .count()
    }
}

// =============================================================================
// Session setup
// =============================================================================

#[test]
fn session_starts_with_player_pencil_and_background_music() {
    let mut game = Game::start(1);
    game.frames(1);

    assert_eq!(game.ctrl().state, PlayerState::Standing);
    assert!(!game.ctrl().attacking);
    assert_eq!(
        game.world.get::<MapPosition>(game.pencil).unwrap().pos,
        Vec2::new(400.0, 50.0)
    );
    assert!(game.session().boxes.is_empty());
    assert_eq!(
        game.audio().first(),
        Some(&AudioCmd::PlayMusic {
            id: MUSIC_BACKGROUND.into(),
            looped: true
        })
    );
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn press_right_walks_then_release_stands() {
    let mut game = Game::start(2);
    game.frames(1);

    game.hold(false, true, false);
    game.frames(1);
    assert_eq!(game.velocity_x(), 160.0);
    assert_eq!(game.ctrl().facing, Facing::Right);
    assert_eq!(game.ctrl().state, PlayerState::Walking);
    assert_eq!(game.animation_key(), "walk");
    assert!(!game.world.get::<Sprite>(game.player).unwrap().flip_h);

    // The walk loop is requested once, not every frame.
    game.frames(5);
    let walk_starts = game
        .audio()
        .iter()
        .filter(|cmd| matches!(cmd, AudioCmd::PlayMusic { id, .. } if id == MUSIC_WALK))
        .count();
    assert_eq!(walk_starts, 1);

    game.hold(false, false, false);
    game.frames(1);
    assert_eq!(game.velocity_x(), 0.0);
    assert_eq!(game.ctrl().state, PlayerState::Standing);
    assert_eq!(game.animation_key(), "stand");
    assert_eq!(
        game.audio().last(),
        Some(&AudioCmd::StopMusic {
            id: MUSIC_WALK.into()
        })
    );
}

#[test]
fn holding_left_and_right_walks_left() {
    let mut game = Game::start(3);
    game.hold(true, true, false);
    game.frames(1);

    assert_eq!(game.velocity_x(), -160.0);
    assert_eq!(game.ctrl().facing, Facing::Left);
    assert_eq!(game.ctrl().state, PlayerState::Walking);
    assert!(game.world.get::<Sprite>(game.player).unwrap().flip_h);
}

#[test]
fn direction_change_stays_walking() {
    let mut game = Game::start(4);
    game.hold(false, true, false);
    game.frames(2);
    game.hold(true, false, false);
    game.frames(1);

    assert_eq!(game.velocity_x(), -160.0);
    assert_eq!(game.ctrl().facing, Facing::Left);
    assert_eq!(game.ctrl().state, PlayerState::Walking);
}

#[test]
fn walking_player_moves_horizontally() {
    let mut game = Game::start(5);
    let start_x = game.world.get::<MapPosition>(game.player).unwrap().pos.x;
    game.hold(false, true, false);
    game.frames(32);

    let x = game.world.get::<MapPosition>(game.player).unwrap().pos.x;
    assert!((x - (start_x + 80.0)).abs() < 1e-3, "x = {}", x);
}

// =============================================================================
// Attack
// =============================================================================

#[test]
fn attack_from_walking_stops_immediately() {
    let mut game = Game::start(6);
    game.hold(false, true, false);
    game.frames(3);
    assert_eq!(game.velocity_x(), 160.0);

    game.hold(false, true, true);
    game.frames(1);
    assert_eq!(game.ctrl().state, PlayerState::Attacking);
    assert!(game.ctrl().attacking);
    assert_eq!(game.velocity_x(), 0.0);
    assert_eq!(game.animation_key(), "hit");
    assert!(game.world.get::<AnimationSubscription>(game.player).is_some());
    assert_eq!(
        game.audio().last(),
        Some(&AudioCmd::StopMusic {
            id: MUSIC_WALK.into()
        })
    );
}

#[test]
fn input_is_ignored_while_attacking() {
    let mut game = Game::start(7);
    game.hold(false, false, true);
    game.frames(1);
    assert!(game.ctrl().attacking);

    game.hold(true, false, false);
    game.frames(10);
    assert_eq!(game.velocity_x(), 0.0);
    assert_eq!(game.ctrl().facing, Facing::Right);
    assert_eq!(game.ctrl().state, PlayerState::Attacking);
    assert_eq!(game.animation_key(), "hit");
}

#[test]
fn attack_ends_once_when_hit_animation_completes() {
    let mut game = Game::start(8);
    game.hold(false, false, true);
    game.frames(1);
    game.hold(false, false, false);

    // 14 frames at 20 fps: about 0.7s.
    game.frames(37);
    assert_eq!(game.ctrl().state, PlayerState::Attacking);

    game.frames(14);
    assert_eq!(game.ctrl().state, PlayerState::Standing);
    assert!(!game.ctrl().attacking);
    assert!(game.world.get::<AnimationSubscription>(game.player).is_none());

    game.frames(1);
    assert_eq!(game.animation_key(), "stand");
    game.frames(60);
    assert_eq!(game.ctrl().state, PlayerState::Standing);
}

#[test]
fn attack_ends_with_animation_file_lacking_hit() {
    let path = std::env::temp_dir().join(format!(
        "notebookbrawl-no-hit-{}.json",
        std::process::id()
    ));
    std::fs::write(
        &path,
        r#"{
            "stand": { "tex_key": "stand", "frame_width": 64, "frame_height": 64,
                       "frame_count": 7, "fps": 5, "looped": true },
            "walk": { "tex_key": "walk", "frame_width": 64, "frame_height": 64,
                      "frame_count": 3, "fps": 10, "looped": true }
        }"#,
    )
    .unwrap();
    let store = load_animations(&path);
    std::fs::remove_file(&path).unwrap();
    assert!(store.get("hit").is_some_and(|hit| !hit.looped));

    let mut world = World::new();
    world.insert_resource(store);
    let mut game = Game::start_with(20, world);
    game.hold(false, false, true);
    game.frames(1);
    game.hold(false, false, false);
    assert!(game.ctrl().attacking);

    game.frames(64 * 2);
    assert!(!game.ctrl().attacking);
    assert_eq!(game.ctrl().state, PlayerState::Standing);
}

#[test]
fn hit_sound_plays_after_delay() {
    let mut game = Game::start(9);
    game.hold(false, false, true);
    game.frames(1);
    game.hold(false, false, false);

    game.frames(17);
    assert_eq!(game.played_fx(FX_HIT), 0);

    game.frames(4);
    assert_eq!(game.played_fx(FX_HIT), 1);

    game.frames(60);
    assert_eq!(game.played_fx(FX_HIT), 1);
}

#[test]
fn repress_while_attacking_is_ignored() {
    let mut game = Game::start(10);
    game.hold(false, false, true);
    game.frames(1);
    game.hold(false, false, false);
    game.frames(5);
    game.hold(false, false, true);
    game.frames(1);
    game.hold(false, false, false);

    let mut timers = game.world.query::<&Timer>();
    let pending_fx = timers
        .iter(&game.world)
        .filter(|t| matches!(t.action, TimerAction::PlayFx { .. }))
        .count();
    assert_eq!(pending_fx, 1);

    game.frames(60);
    assert_eq!(game.played_fx(FX_HIT), 1);
    assert_eq!(game.ctrl().state, PlayerState::Standing);
}

#[test]
fn holding_attack_starts_a_new_attack_after_completion() {
    let mut game = Game::start(11);
    game.hold(false, false, true);
    game.frames(1);

    game.frames(60);
    assert_eq!(game.ctrl().state, PlayerState::Attacking);
    assert_eq!(game.played_fx(FX_HIT), 1);

    game.frames(40);
    assert_eq!(game.played_fx(FX_HIT), 2);
}

// =============================================================================
// Boxes
// =============================================================================

#[test]
fn overlapping_box_is_destroyed_after_delay() {
    let mut game = Game::start(12);
    game.frames(1);
    let target = game.box_on_player();

    game.hold(false, false, true);
    game.frames(1);
    game.hold(false, false, false);
    assert!(game.world.get::<PendingDestroy>(target).is_some());

    // 400ms at 1/64s per frame: 26 frames after scheduling.
    game.frames(23);
    assert!(game.world.get_entity(target).is_ok());
    assert!(game.session().boxes.contains(target));

    game.frames(4);
    assert!(game.world.get_entity(target).is_err());
    assert!(!game.session().boxes.contains(target));
}

#[test]
fn distant_box_survives_attack() {
    let mut game = Game::start(13);
    game.frames(1);
    let far = game.box_at(Vec2::new(600.0, 450.0));

    game.hold(false, false, true);
    game.frames(1);
    game.hold(false, false, false);
    game.frames(60);

    assert!(game.world.get_entity(far).is_ok());
    assert!(game.world.get::<PendingDestroy>(far).is_none());
    assert!(game.session().boxes.contains(far));
}

#[test]
fn box_is_not_destroyed_without_attack() {
    let mut game = Game::start(14);
    game.frames(1);
    let target = game.box_on_player();

    game.frames(60);
    assert!(game.world.get_entity(target).is_ok());
    assert!(game.world.get::<PendingDestroy>(target).is_none());
}

#[test]
fn box_arriving_mid_attack_is_not_hit() {
    let mut game = Game::start(15);
    game.hold(false, false, true);
    game.frames(1);
    game.hold(false, false, false);
    game.frames(5);

    let late = game.box_on_player();
    game.frames(30);
    assert!(game.world.get::<PendingDestroy>(late).is_none());
    assert!(game.world.get_entity(late).is_ok());
}

#[test]
fn spawn_timer_draws_box_at_pencil() {
    let mut game = Game::start(16);
    let pencil_at = game.world.get::<MapPosition>(game.pencil).unwrap().pos;

    game.world.trigger(TimerEvent {
        entity: Entity::PLACEHOLDER,
        action: TimerAction::SpawnBox,
    });
    game.world.flush();

    let boxes: Vec<Entity> = game.session().boxes.iter().collect();
    assert_eq!(boxes.len(), 1);
    assert_eq!(
        game.world.get::<MapPosition>(boxes[0]).unwrap().pos,
        pencil_at
    );
    assert!(game.world.get::<DrawnBox>(boxes[0]).is_some());
}

#[test]
fn boxes_are_drawn_every_three_seconds_and_fall() {
    let mut game = Game::start(17);

    game.frames(191);
    assert!(game.session().boxes.is_empty());

    game.frames(2);
    assert_eq!(game.session().boxes.len(), 1);

    game.frames(192);
    assert_eq!(game.session().boxes.len(), 2);

    let first = game.session().boxes.iter().next().unwrap();
    let pos = game.world.get::<MapPosition>(first).unwrap().pos;
    assert!((100.0..=700.0).contains(&pos.x));
    // Resting on the floor: half the box size above the bottom edge.
    assert!((pos.y - 584.0).abs() < 1e-3, "y = {}", pos.y);
}

#[test]
fn destroying_a_box_twice_is_harmless() {
    let mut game = Game::start(18);
    game.frames(1);
    let target = game.box_at(Vec2::new(300.0, 300.0));

    for _ in 0..2 {
        game.world.trigger(TimerEvent {
            entity: Entity::PLACEHOLDER,
            action: TimerAction::DestroyBox { target },
        });
        game.world.flush();
    }
    assert!(game.world.get_entity(target).is_err());
    assert!(game.session().boxes.is_empty());
}

// =============================================================================
// Pencil
// =============================================================================

#[test]
fn pencil_stays_on_its_rail() {
    let mut game = Game::start(19);
    let mut seen_x = Vec::new();
    for _ in 0..(64 * 10) {
        game.frames(1);
        let pos = game.world.get::<MapPosition>(game.pencil).unwrap().pos;
        assert_eq!(pos.y, 50.0);
        assert!((100.0..=700.0).contains(&pos.x), "x = {}", pos.x);
        assert_eq!(pos.x.fract(), 0.0);
        if seen_x.last() != Some(&pos.x) {
            seen_x.push(pos.x);
        }
    }
    // The motion timer fires at least every three seconds.
    assert!(seen_x.len() >= 2, "pencil never moved: {:?}", seen_x);
}

#[test]
fn same_seed_replays_the_same_pencil_path() {
    let mut a = Game::start(42);
    let mut b = Game::start(42);
    for _ in 0..(64 * 6) {
        a.frames(1);
        b.frames(1);
        assert_eq!(
            a.world.get::<MapPosition>(a.pencil).unwrap().pos,
            b.world.get::<MapPosition>(b.pencil).unwrap().pos
        );
    }
}
