//! Kinematic body component with named acceleration forces.
//!
//! The [`RigidBody`] component stores velocity and named acceleration forces
//! for an entity. The player and the falling boxes each carry their own
//! `"gravity"` force; the pencil has none and floats.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use rustc_hash::FxHashMap;

/// Name of the downward acceleration force.
pub const GRAVITY_FORCE: &str = "gravity";

/// Kinematic body storing velocity and named acceleration forces.
///
/// Updated by the player controller and consumed by the
/// [`movement`](crate::systems::movement::movement) system to update
/// [`MapPosition`](super::mapposition::MapPosition).
///
/// # Example
/// ```
/// use notebookbrawl::components::rigidbody::RigidBody;
///
/// let body = RigidBody::new().with_gravity(300.0);
/// assert_eq!(body.total_acceleration().y, 300.0);
/// ```
#[derive(Component, Clone, Debug, Default)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Named accelerations in world units per second squared, summed each frame.
    pub forces: FxHashMap<String, Vec2>,
}

impl RigidBody {
    /// Create a RigidBody with zero velocity and no forces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder shorthand for a downward gravity force of `strength` units/s².
    pub fn with_gravity(mut self, strength: f32) -> Self {
        self.add_force(GRAVITY_FORCE, Vec2::new(0.0, strength));
        self
    }

    /// Add or replace a named acceleration force.
    pub fn add_force(&mut self, name: &str, value: Vec2) {
        self.forces.insert(name.to_string(), value);
    }

    /// Calculate the total acceleration from all forces.
    pub fn total_acceleration(&self) -> Vec2 {
        self.forces.values().fold(Vec2::ZERO, |acc, f| acc + *f)
    }

    /// Set only the horizontal component of the velocity.
    pub fn set_velocity_x(&mut self, vx: f32) {
        self.velocity.x = vx;
    }
}
