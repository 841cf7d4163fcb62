//! Movement integration.
//!
//! [`movement`] applies each [`RigidBody`]'s forces to its velocity,
//! moves the entity by that velocity, and then keeps entities marked with
//! [`CollideWorldBounds`] inside the [`WorldBounds`]. Hitting a wall zeroes
//! the velocity component pointing into it, so falling boxes come to rest on
//! the floor.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::collideworldbounds::CollideWorldBounds;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;

pub fn movement(
    mut query: Query<(
        &mut MapPosition,
        &mut RigidBody,
        Option<&BoxCollider>,
        Has<CollideWorldBounds>,
    )>,
    time: Res<WorldTime>,
    bounds: Option<Res<WorldBounds>>,
) {
    let dt = time.delta;
    for (mut position, mut rigidbody, collider, collides) in query.iter_mut() {
        let acceleration = rigidbody.total_acceleration();
        rigidbody.velocity += acceleration * dt;
        position.pos += rigidbody.velocity * dt;

        if let (true, Some(bounds)) = (collides, bounds.as_deref()) {
            let collider = collider
                .copied()
                .unwrap_or_else(|| BoxCollider::new(0.0, 0.0));
            keep_inside(&mut position.pos, &mut rigidbody.velocity, &collider, bounds);
        }
    }
}

fn keep_inside(pos: &mut Vec2, velocity: &mut Vec2, collider: &BoxCollider, bounds: &WorldBounds) {
    let (min, max) = collider.aabb(*pos);

    if min.x < bounds.min.x {
        pos.x += bounds.min.x - min.x;
        velocity.x = velocity.x.max(0.0);
    } else if max.x > bounds.max.x {
        pos.x -= max.x - bounds.max.x;
        velocity.x = velocity.x.min(0.0);
    }

    if min.y < bounds.min.y {
        pos.y += bounds.min.y - min.y;
        velocity.y = velocity.y.max(0.0);
    } else if max.y > bounds.max.y {
        pos.y -= max.y - bounds.max.y;
        velocity.y = velocity.y.min(0.0);
    }
}
