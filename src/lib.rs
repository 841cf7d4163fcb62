//! Notebook Brawl library.
//!
//! Exposes the game's ECS components, resources, systems, and events so the
//! game loop can be driven headless from integration tests. The window,
//! keyboard, drawing and the audio thread need the `raylib` feature.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
