use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Sprite is identified by a texture key, its frame size in texture pixels and
/// an offset selecting the frame when the texture is a spritesheet.
///
/// `scale` multiplies the frame size when drawing. The sprite is drawn centred
/// on the entity's [`MapPosition`](super::mapposition::MapPosition).
/// `flip_h` mirrors the frame horizontally (the player faces left).
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vec2,
    pub scale: f32,
    pub flip_h: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vec2::ZERO,
            scale: 1.0,
            flip_h: false,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Size on screen after scaling.
    pub fn display_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_size_applies_scale() {
        let sprite = Sprite::new("stand", 64.0, 64.0).with_scale(1.5);
        assert_eq!(sprite.display_size(), Vec2::new(96.0, 96.0));
        assert!(!sprite.flip_h);
    }
}
