//! Animation playback.
//!
//! [`animation`] advances every [`Animation`] by the frame delta and points the
//! entity's [`Sprite`] at the current frame of the animation's spritesheet.
//!
//! # Animation Flow
//!
//! 1. Animation data is defined in [`AnimationStore`]
//! 2. Entities carry an [`Animation`] naming a key in the store
//! 3. Each frame lasts `1 / fps` seconds; the last frame of a looped animation
//!    is held for an extra `repeat_delay` before wrapping to frame 0
//! 4. A non-looping animation that runs past its last frame stays on that
//!    frame, is marked finished, and triggers [`AnimationCompleteEvent`] once

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::events::animation::AnimationCompleteEvent;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::worldtime::WorldTime;

pub fn animation(
    mut query: Query<(Entity, &mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (entity, mut anim, mut sprite) in query.iter_mut() {
        let Some(def) = animation_store.get(&anim.animation_key) else {
            continue;
        };

        if advance(&mut anim, def, time.delta) {
            log::debug!("animation '{}' completed on {:?}", anim.animation_key, entity);
            commands.trigger(AnimationCompleteEvent {
                entity,
                animation_key: anim.animation_key.clone(),
            });
        }

        if sprite.tex_key != def.tex_key {
            sprite.tex_key = def.tex_key.clone();
        }
        sprite.width = def.frame_width;
        sprite.height = def.frame_height;
        sprite.offset = Vec2::new(anim.frame_index as f32 * def.frame_width, 0.0);
    }
}

/// Step `anim` forward by `delta` seconds. Returns true if it finished during
/// this step.
fn advance(anim: &mut Animation, def: &AnimationResource, delta: f32) -> bool {
    if anim.finished || def.frame_count == 0 || def.fps <= 0.0 {
        return false;
    }
    let frame_duration = 1.0 / def.fps;
    anim.frame_index = anim.frame_index.min(def.frame_count - 1);
    anim.elapsed_time += delta;

    loop {
        let on_last = anim.frame_index + 1 >= def.frame_count;
        let hold = if on_last && def.looped {
            frame_duration + def.repeat_delay.max(0.0)
        } else {
            frame_duration
        };
        if anim.elapsed_time < hold {
            return false;
        }
        anim.elapsed_time -= hold;

        if !on_last {
            anim.frame_index += 1;
        } else if def.looped {
            anim.frame_index = 0;
        } else {
            anim.finished = true;
            anim.elapsed_time = 0.0;
            return true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(frame_count: usize, fps: f32, looped: bool, repeat_delay: f32) -> AnimationResource {
        AnimationResource {
            tex_key: "sheet".into(),
            frame_width: 64.0,
            frame_height: 64.0,
            frame_count,
            fps,
            looped,
            repeat_delay,
        }
    }

    #[test]
    fn advances_one_frame_per_frame_duration() {
        let d = def(3, 4.0, true, 0.0);
        let mut anim = Animation::new("sheet");

        assert!(!advance(&mut anim, &d, 0.125));
        assert_eq!(anim.frame_index, 0);
        assert!(!advance(&mut anim, &d, 0.125));
        assert_eq!(anim.frame_index, 1);
    }

    #[test]
    fn looped_animation_wraps() {
        let d = def(3, 4.0, true, 0.0);
        let mut anim = Animation::new("sheet");

        advance(&mut anim, &d, 0.75);
        assert_eq!(anim.frame_index, 0);
        assert!(!anim.finished);
    }

    #[test]
    fn repeat_delay_holds_last_frame() {
        let d = def(2, 4.0, true, 0.5);
        let mut anim = Animation::new("sheet");

        advance(&mut anim, &d, 0.25);
        assert_eq!(anim.frame_index, 1);
        advance(&mut anim, &d, 0.5);
        assert_eq!(anim.frame_index, 1);
        advance(&mut anim, &d, 0.25);
        assert_eq!(anim.frame_index, 0);
    }

    #[test]
    fn one_shot_finishes_once_on_last_frame() {
        let d = def(14, 20.0, false, 0.0);
        let mut anim = Animation::new("sheet");

        assert!(!advance(&mut anim, &d, 0.5));
        assert!(advance(&mut anim, &d, 0.25));
        assert!(anim.finished);
        assert_eq!(anim.frame_index, 13);

        assert!(!advance(&mut anim, &d, 1.0));
        assert_eq!(anim.frame_index, 13);
    }

    #[test]
    fn completion_event_and_sprite_frame() {
        let mut world = World::new();
        let mut store = AnimationStore::default();
        store.insert("once", def(2, 4.0, false, 0.0));
        world.insert_resource(store);
        world.insert_resource(WorldTime {
            delta: 0.25,
            ..WorldTime::default()
        });

        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        world.add_observer(move |trigger: bevy_ecs::observer::On<AnimationCompleteEvent>| {
            seen_clone.lock().unwrap().push(trigger.event().clone());
        });

        let entity = world
            .spawn((Animation::new("once"), Sprite::new("placeholder", 1.0, 1.0)))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(animation);

        schedule.run(&mut world);
        let sprite = world.get::<Sprite>(entity).unwrap();
        assert_eq!(sprite.tex_key, "sheet");
        assert_eq!(sprite.offset, Vec2::new(64.0, 0.0));
        assert!(seen.lock().unwrap().is_empty());

        schedule.run(&mut world);
        schedule.run(&mut world);
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].entity, entity);
        assert_eq!(seen[0].animation_key, "once");
    }
}
