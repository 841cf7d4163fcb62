//! Event types and observers.
//!
//! Submodules:
//! - [`animation`] – completion of non-looping animations
//! - [`audio`] – commands and messages for the background audio thread
//! - [`switchdebug`] – toggle the debug overlay on/off
//! - [`timer`] – scheduled task firings
pub mod animation;
pub mod audio;
pub mod switchdebug;
pub mod timer;
