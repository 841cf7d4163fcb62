//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations and report completions
//! - [`audio`] – bridge with the audio thread (poll/forward message queues)
//! - [`gameloop`] – player state machine, attack hits, scheduled task actions
//! - [`input`] – read the keyboard into [`crate::resources::input::InputState`]
//! - [`movement`] – integrate velocities and keep bodies inside the world
//! - [`render`] – draw sprites and the debug overlay
//! - [`time`] – advance [`crate::resources::worldtime::WorldTime`]
//! - [`timer`] – tick scheduled tasks and fire their actions
//!
//! `input` and `render` need a window and only exist with the `raylib`
//! feature.

pub mod animation;
pub mod audio;
pub mod gameloop;
#[cfg(feature = "raylib")]
pub mod input;
pub mod movement;
#[cfg(feature = "raylib")]
pub mod render;
pub mod time;
pub mod timer;
