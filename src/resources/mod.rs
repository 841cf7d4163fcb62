//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – definitions for sprite animations reused across entities
//! - `audio` – bridge to the background audio thread and looping-sound bookkeeping
//! - `debugmode` – presence toggles the collider overlay
//! - `gameconfig` – tuning and window settings loaded from `config.ini`
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `rng` – seedable random source for gameplay
//! - `session` – player, pencil and live boxes of the running session
//! - `texturestore` – loaded textures keyed by string IDs (window build only)
//! - `worldbounds` – rectangle bodies are kept inside
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod audio;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod rng;
pub mod session;
#[cfg(feature = "raylib")]
pub mod texturestore;
pub mod worldbounds;
pub mod worldtime;
