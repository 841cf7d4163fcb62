//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Every value
//! has a sensible default, so a missing file or missing
//! key is never an error for the game itself.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//! title = Notebook Brawl
//!
//! [player]
//! speed = 160
//! gravity = 500
//!
//! [pencil]
//! y = 50
//! min_x = 100
//! max_x = 700
//! min_interval_ms = 1000
//! max_interval_ms = 3000
//!
//! [boxes]
//! spawn_interval_ms = 3000
//! gravity = 300
//! size = 32
//!
//! [combat]
//! hit_sound_delay_ms = 300
//! destroy_delay_ms = 400
//!
//! [audio]
//! walk_volume = 0.3
//! hit_volume = 0.5
//! music_volume = 0.5
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Notebook Brawl";
const DEFAULT_PLAYER_SPEED: f32 = 160.0;
const DEFAULT_PLAYER_GRAVITY: f32 = 500.0;
const DEFAULT_PENCIL_Y: f32 = 50.0;
const DEFAULT_PENCIL_MIN_X: i32 = 100;
const DEFAULT_PENCIL_MAX_X: i32 = 700;
const DEFAULT_PENCIL_MIN_INTERVAL_MS: u32 = 1000;
const DEFAULT_PENCIL_MAX_INTERVAL_MS: u32 = 3000;
const DEFAULT_BOX_SPAWN_INTERVAL_MS: u32 = 3000;
const DEFAULT_BOX_GRAVITY: f32 = 300.0;
const DEFAULT_BOX_SIZE: f32 = 32.0;
const DEFAULT_HIT_SOUND_DELAY_MS: u32 = 300;
const DEFAULT_DESTROY_DELAY_MS: u32 = 400;
const DEFAULT_WALK_VOLUME: f32 = 0.3;
const DEFAULT_HIT_VOLUME: f32 = 0.5;
const DEFAULT_MUSIC_VOLUME: f32 = 0.5;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub title: String,
    /// Horizontal walking speed in pixels per second.
    pub player_speed: f32,
    pub player_gravity: f32,
    /// Fixed height of the pencil.
    pub pencil_y: f32,
    pub pencil_min_x: i32,
    pub pencil_max_x: i32,
    pub pencil_min_interval_ms: u32,
    pub pencil_max_interval_ms: u32,
    pub box_spawn_interval_ms: u32,
    pub box_gravity: f32,
    /// Side of the square box collider, in pixels.
    pub box_size: f32,
    pub hit_sound_delay_ms: u32,
    pub destroy_delay_ms: u32,
    pub walk_volume: f32,
    pub hit_volume: f32,
    pub music_volume: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn ms_to_secs(ms: u32) -> f32 {
    ms as f32 / 1000.0
}

impl GameConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            player_speed: DEFAULT_PLAYER_SPEED,
            player_gravity: DEFAULT_PLAYER_GRAVITY,
            pencil_y: DEFAULT_PENCIL_Y,
            pencil_min_x: DEFAULT_PENCIL_MIN_X,
            pencil_max_x: DEFAULT_PENCIL_MAX_X,
            pencil_min_interval_ms: DEFAULT_PENCIL_MIN_INTERVAL_MS,
            pencil_max_interval_ms: DEFAULT_PENCIL_MAX_INTERVAL_MS,
            box_spawn_interval_ms: DEFAULT_BOX_SPAWN_INTERVAL_MS,
            box_gravity: DEFAULT_BOX_GRAVITY,
            box_size: DEFAULT_BOX_SIZE,
            hit_sound_delay_ms: DEFAULT_HIT_SOUND_DELAY_MS,
            destroy_delay_ms: DEFAULT_DESTROY_DELAY_MS,
            walk_volume: DEFAULT_WALK_VOLUME,
            hit_volume: DEFAULT_HIT_VOLUME,
            music_volume: DEFAULT_MUSIC_VOLUME,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        let uint = |section: &str, key: &str| {
            config
                .getuint(section, key)
                .ok()
                .flatten()
                .and_then(|v| u32::try_from(v).ok())
        };
        let int = |section: &str, key: &str| {
            config
                .getint(section, key)
                .ok()
                .flatten()
                .and_then(|v| i32::try_from(v).ok())
        };
        let float = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };

        // [window]
        if let Some(v) = uint("window", "width") {
            self.window_width = v;
        }
        if let Some(v) = uint("window", "height") {
            self.window_height = v;
        }
        if let Some(v) = uint("window", "target_fps") {
            self.target_fps = v;
        }
        if let Some(v) = config.get("window", "title") {
            self.title = v;
        }

        // [player]
        if let Some(v) = float("player", "speed") {
            self.player_speed = v;
        }
        if let Some(v) = float("player", "gravity") {
            self.player_gravity = v;
        }

        // [pencil]
        if let Some(v) = float("pencil", "y") {
            self.pencil_y = v;
        }
        if let Some(v) = int("pencil", "min_x") {
            self.pencil_min_x = v;
        }
        if let Some(v) = int("pencil", "max_x") {
            self.pencil_max_x = v;
        }
        if let Some(v) = uint("pencil", "min_interval_ms") {
            self.pencil_min_interval_ms = v;
        }
        if let Some(v) = uint("pencil", "max_interval_ms") {
            self.pencil_max_interval_ms = v;
        }

        // [boxes]
        if let Some(v) = uint("boxes", "spawn_interval_ms") {
            self.box_spawn_interval_ms = v;
        }
        if let Some(v) = float("boxes", "gravity") {
            self.box_gravity = v;
        }
        if let Some(v) = float("boxes", "size") {
            self.box_size = v;
        }

        // [combat]
        if let Some(v) = uint("combat", "hit_sound_delay_ms") {
            self.hit_sound_delay_ms = v;
        }
        if let Some(v) = uint("combat", "destroy_delay_ms") {
            self.destroy_delay_ms = v;
        }

        // [audio]
        if let Some(v) = float("audio", "walk_volume") {
            self.walk_volume = v;
        }
        if let Some(v) = float("audio", "hit_volume") {
            self.hit_volume = v;
        }
        if let Some(v) = float("audio", "music_volume") {
            self.music_volume = v;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, speed={}, pencil x in [{}, {}], boxes every {}ms",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.player_speed,
            self.pencil_min_x,
            self.pencil_max_x,
            self.box_spawn_interval_ms
        );
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub fn box_spawn_interval(&self) -> f32 {
        ms_to_secs(self.box_spawn_interval_ms)
    }

    pub fn hit_sound_delay(&self) -> f32 {
        ms_to_secs(self.hit_sound_delay_ms)
    }

    pub fn destroy_delay(&self) -> f32 {
        ms_to_secs(self.destroy_delay_ms)
    }
}
