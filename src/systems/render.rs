//! Drawing with raylib.
//!
//! [`render_system`] clears the window to white and draws every sprite in
//! ascending [`ZIndex`] order, centred on its [`MapPosition`] and scaled by
//! its `scale`. With [`DebugMode`] present it also outlines colliders and
//! prints the player state.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::PlayerController;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::texturestore::TextureStore;

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    textures: NonSend<TextureStore>,
    sprites: Query<(&Sprite, &MapPosition, &ZIndex)>,
    colliders: Query<(&BoxCollider, &MapPosition)>,
    players: Query<&PlayerController>,
    debug: Option<Res<DebugMode>>,
) {
    let mut to_draw: Vec<(&Sprite, &MapPosition, &ZIndex)> = sprites.iter().collect();
    to_draw.sort_by_key(|(_, _, z)| **z);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::WHITE);

    for (sprite, pos, _z) in to_draw {
        let Some(tex) = textures.get(&sprite.tex_key) else {
            continue;
        };
        // A negative source width mirrors the frame.
        let src = Rectangle {
            x: sprite.offset.x,
            y: sprite.offset.y,
            width: if sprite.flip_h { -sprite.width } else { sprite.width },
            height: sprite.height,
        };
        let size = sprite.display_size();
        let dest = Rectangle {
            x: pos.pos.x,
            y: pos.pos.y,
            width: size.x,
            height: size.y,
        };
        let origin = Vector2 {
            x: size.x * 0.5,
            y: size.y * 0.5,
        };
        d.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE);
    }

    if debug.is_some() {
        for (collider, position) in colliders.iter() {
            let (min, max) = collider.aabb(position.pos);
            d.draw_rectangle_lines(
                min.x as i32,
                min.y as i32,
                (max.x - min.x) as i32,
                (max.y - min.y) as i32,
                Color::RED,
            );
        }
        for ctrl in players.iter() {
            let text = format!("state: {:?} facing: {:?}", ctrl.state, ctrl.facing);
            d.draw_text(&text, 10, 30, 10, Color::BLACK);
        }
        d.draw_fps(10, 10);
    }
}
