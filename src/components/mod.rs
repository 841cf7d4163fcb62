//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – playback state and one-shot completion subscriptions
//! - [`boxcollider`] – axis-aligned rectangular collider for overlap queries
//! - [`collideworldbounds`] – keep a body inside the world rectangle
//! - [`drawnbox`] – markers for boxes drawn by the pencil
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`pencil`] – marker for the box-drawing pencil
//! - [`player`] – player control state machine
//! - [`rigidbody`] – velocity and named acceleration forces
//! - [`sprite`] – 2D sprite rendering component
//! - [`timer`] – scheduled task descriptors
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod collideworldbounds;
pub mod drawnbox;
pub mod mapposition;
pub mod pencil;
pub mod player;
pub mod rigidbody;
pub mod sprite;
pub mod timer;
pub mod zindex;
