//! Animation resource registry.
//!
//! A minimal store for animation definitions shared by entities. Systems look
//! up an animation by its string key and drive playback from the immutable
//! parameters stored here.
//!
//! Definitions can be loaded from a JSON object keyed by animation name:
//!
//! ```json
//! {
//!   "stand": { "tex_key": "stand", "frame_width": 64, "frame_height": 64,
//!              "frame_count": 7, "fps": 5, "looped": true, "repeat_delay": 0.5 }
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub const ANIM_STAND: &str = "stand";
pub const ANIM_WALK: &str = "walk";
pub const ANIM_HIT: &str = "hit";

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Debug, Clone, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

/// Immutable data describing a horizontal sprite-sheet animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationResource {
    /// Texture key in the texture store.
    pub tex_key: String,
    pub frame_width: f32,
    pub frame_height: f32,
    /// Number of frames in the animation.
    pub frame_count: usize,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
    /// Seconds to hold the last frame before a looped animation restarts.
    #[serde(default)]
    pub repeat_delay: f32,
}

impl AnimationStore {
    /// Built-in definitions for the three player spritesheets.
    pub fn with_defaults() -> Self {
        let mut store = Self::default();
        store.insert(
            ANIM_STAND,
            AnimationResource {
                tex_key: ANIM_STAND.into(),
                frame_width: 64.0,
                frame_height: 64.0,
                frame_count: 7,
                fps: 5.0,
                looped: true,
                repeat_delay: 0.5,
            },
        );
        store.insert(
            ANIM_WALK,
            AnimationResource {
                tex_key: ANIM_WALK.into(),
                frame_width: 64.0,
                frame_height: 64.0,
                frame_count: 3,
                fps: 10.0,
                looped: true,
                repeat_delay: 0.0,
            },
        );
        store.insert(
            ANIM_HIT,
            AnimationResource {
                tex_key: ANIM_HIT.into(),
                frame_width: 64.0,
                frame_height: 64.0,
                frame_count: 14,
                fps: 20.0,
                looped: false,
                repeat_delay: 0.0,
            },
        );
        store
    }

    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }

    /// Parse definitions from a JSON object keyed by animation name.
    ///
    /// The player's `stand`, `walk` and `hit` animations must all be present,
    /// and `hit` must not loop: its completion is what ends an attack.
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let animations: FxHashMap<String, AnimationResource> = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse animation definitions: {}", e))?;
        for (key, anim) in animations.iter() {
            if anim.frame_count == 0 || anim.fps <= 0.0 {
                return Err(format!(
                    "Animation '{}' needs at least one frame and a positive fps",
                    key
                ));
            }
        }
        for key in [ANIM_STAND, ANIM_WALK, ANIM_HIT] {
            if !animations.contains_key(key) {
                return Err(format!("Animation '{}' is missing", key));
            }
        }
        if animations.get(ANIM_HIT).is_some_and(|hit| hit.looped) {
            return Err(format!("Animation '{}' must not loop", ANIM_HIT));
        }
        Ok(Self { animations })
    }

    /// Load definitions from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_json_str(&json)
    }
}
