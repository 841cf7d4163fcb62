//! The game loop controller.
//!
//! Three pieces turn input and timer firings into game state changes:
//!
//! - [`player_controller`] runs once per frame and drives the player's
//!   Standing/Walking/Attacking state machine and the attack hit check.
//! - [`attack_complete_observer`] ends an attack when the player's `"hit"`
//!   animation reports completion.
//! - [`timer_observer`] applies the action of every scheduled task that fires:
//!   drawing boxes, moving the pencil, the delayed hit sound, and delayed box
//!   destruction.
//!
//! All state lives in the [`GameSession`] resource and the player's
//! [`PlayerController`]; both are passed in explicitly.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::animation::{Animation, AnimationSubscription};
use crate::components::boxcollider::BoxCollider;
use crate::components::collideworldbounds::CollideWorldBounds;
use crate::components::drawnbox::{DrawnBox, PendingDestroy};
use crate::components::mapposition::MapPosition;
use crate::components::pencil::Pencil;
use crate::components::player::{Facing, PlayerController, PlayerState};
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::timer::{Timer, TimerAction};
use crate::components::zindex::ZIndex;
use crate::events::animation::AnimationCompleteEvent;
use crate::events::audio::{AudioCmd, FX_HIT, MUSIC_WALK};
use crate::events::timer::TimerEvent;
use crate::resources::animationstore::{ANIM_HIT, ANIM_STAND, ANIM_WALK};
use crate::resources::audio::LoopingSounds;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;
use crate::resources::session::GameSession;

pub const BOX_TEXTURE: &str = "box";

/// Horizontal movement requested by the held direction keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveIntent {
    Left,
    Right,
    Idle,
}

/// Left is checked first, so holding both directions walks left.
pub fn resolve_movement(input: &InputState) -> MoveIntent {
    if input.left.active {
        MoveIntent::Left
    } else if input.right.active {
        MoveIntent::Right
    } else {
        MoveIntent::Idle
    }
}

/// Per-frame player update.
///
/// 1. While attacking, nothing happens: velocity, animation and hit checks all
///    stay as they were until the attack animation completes.
/// 2. Movement: walk left/right at the configured speed (keeping the walk
///    sound looping) or stand still (stopping it).
/// 3. Attack held: stop, play `"hit"`, schedule the hit sound, and subscribe
///    once to the animation's completion.
/// 4. If now attacking, every live box overlapping the player is scheduled
///    for destruction after the configured delay.
#[allow(clippy::too_many_arguments)]
pub fn player_controller(
    input: Res<InputState>,
    config: Res<GameConfig>,
    session: Res<GameSession>,
    mut loops: ResMut<LoopingSounds>,
    mut audio: MessageWriter<AudioCmd>,
    mut players: Query<(
        &mut PlayerController,
        &mut RigidBody,
        &mut Sprite,
        &mut Animation,
        &MapPosition,
        &BoxCollider,
    )>,
    boxes: Query<(&MapPosition, &BoxCollider), (With<DrawnBox>, Without<PendingDestroy>)>,
    mut commands: Commands,
) {
    let Ok((mut ctrl, mut body, mut sprite, mut anim, position, collider)) =
        players.get_mut(session.player)
    else {
        return;
    };

    if ctrl.attacking {
        return;
    }

    match resolve_movement(&input) {
        MoveIntent::Left => {
            walk(
                &mut ctrl,
                &mut body,
                &mut sprite,
                &mut anim,
                Facing::Left,
                config.player_speed,
            );
            if let Some(cmd) = loops.start(MUSIC_WALK) {
                audio.write(cmd);
            }
        }
        MoveIntent::Right => {
            walk(
                &mut ctrl,
                &mut body,
                &mut sprite,
                &mut anim,
                Facing::Right,
                config.player_speed,
            );
            if let Some(cmd) = loops.start(MUSIC_WALK) {
                audio.write(cmd);
            }
        }
        MoveIntent::Idle => {
            body.set_velocity_x(0.0);
            anim.play(ANIM_STAND);
            ctrl.state = PlayerState::Standing;
            if let Some(cmd) = loops.stop(MUSIC_WALK) {
                audio.write(cmd);
            }
        }
    }

    if input.attack.active && ctrl.begin_attack() {
        body.set_velocity_x(0.0);
        anim.play(ANIM_HIT);
        // The player stands still while attacking, so the walk loop goes
        // quiet; the next walking frame restarts it.
        if let Some(cmd) = loops.stop(MUSIC_WALK) {
            audio.write(cmd);
        }
        commands.spawn(Timer::once(
            config.hit_sound_delay(),
            TimerAction::PlayFx { id: FX_HIT.into() },
        ));
        commands
            .entity(session.player)
            .insert(AnimationSubscription::new(ANIM_HIT));
        log::debug!("player attack started");
    }

    if !ctrl.attacking {
        return;
    }

    for target in session.boxes.iter() {
        let Ok((box_position, box_collider)) = boxes.get(target) else {
            continue;
        };
        if collider.overlaps(position.pos, box_collider, box_position.pos) {
            commands.entity(target).try_insert(PendingDestroy);
            commands.spawn(Timer::once(
                config.destroy_delay(),
                TimerAction::DestroyBox { target },
            ));
            log::debug!("box {:?} hit, destroying in {}ms", target, config.destroy_delay_ms);
        }
    }
}

fn walk(
    ctrl: &mut PlayerController,
    body: &mut RigidBody,
    sprite: &mut Sprite,
    anim: &mut Animation,
    facing: Facing,
    speed: f32,
) {
    let vx = match facing {
        Facing::Left => -speed,
        Facing::Right => speed,
    };
    body.set_velocity_x(vx);
    ctrl.facing = facing;
    ctrl.state = PlayerState::Walking;
    sprite.flip_h = facing == Facing::Left;
    anim.play(ANIM_WALK);
}

/// Ends the attack on the first completion of the subscribed animation.
///
/// The subscription is consumed, so later completions of the same animation
/// (or completions of other animations) are ignored.
pub fn attack_complete_observer(
    trigger: On<AnimationCompleteEvent>,
    mut players: Query<(&mut PlayerController, Option<&AnimationSubscription>)>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok((mut ctrl, subscription)) = players.get_mut(event.entity) else {
        return;
    };
    match subscription {
        Some(sub) if sub.animation_key == event.animation_key => {}
        _ => return,
    }

    commands
        .entity(event.entity)
        .remove::<AnimationSubscription>();
    if ctrl.finish_attack() {
        log::debug!("player attack finished");
    }
}

/// Applies the action of a fired scheduled task.
pub fn timer_observer(
    trigger: On<TimerEvent>,
    config: Res<GameConfig>,
    mut session: ResMut<GameSession>,
    mut rng: ResMut<GameRng>,
    mut pencils: Query<&mut MapPosition, With<Pencil>>,
    mut audio: MessageWriter<AudioCmd>,
    mut commands: Commands,
) {
    match &trigger.event().action {
        TimerAction::SpawnBox => {
            let Ok(pencil) = pencils.get(session.pencil) else {
                return;
            };
            let at = pencil.pos;
            let entity = commands.spawn(box_bundle(at, &config)).id();
            session.boxes.push(entity);
            log::debug!("box {:?} drawn at ({}, {})", entity, at.x, at.y);
        }
        TimerAction::MovePencil => {
            let Ok(mut pencil) = pencils.get_mut(session.pencil) else {
                return;
            };
            let (lo, hi) = if config.pencil_min_x <= config.pencil_max_x {
                (config.pencil_min_x, config.pencil_max_x)
            } else {
                (config.pencil_max_x, config.pencil_min_x)
            };
            let x = rng.0.i32(lo..=hi);
            pencil.pos = Vec2::new(x as f32, config.pencil_y);
        }
        TimerAction::PlayFx { id } => {
            audio.write(AudioCmd::PlayFx { id: id.clone() });
        }
        TimerAction::DestroyBox { target } => {
            if session.boxes.remove(*target) {
                commands.entity(*target).try_despawn();
                log::debug!("box {:?} destroyed", target);
            }
        }
    }
}

/// Components of a freshly drawn box: falls under its own gravity and rests on
/// the bottom of the world.
pub fn box_bundle(
    at: Vec2,
    config: &GameConfig,
) -> (
    DrawnBox,
    MapPosition,
    RigidBody,
    BoxCollider,
    CollideWorldBounds,
    Sprite,
    ZIndex,
) {
    (
        DrawnBox,
        MapPosition { pos: at },
        RigidBody::new().with_gravity(config.box_gravity),
        BoxCollider::centered(config.box_size, config.box_size),
        CollideWorldBounds,
        Sprite::new(BOX_TEXTURE, config.box_size, config.box_size),
        ZIndex(1),
    )
}
