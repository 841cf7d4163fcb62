//! The running game session.
//!
//! [`GameSession`] owns the handles of everything the game loop manipulates:
//! the single player, the pencil, and the live boxes in spawn order. Systems
//! receive it as an explicit parameter; nothing reaches for it globally.
use bevy_ecs::prelude::*;

/// Live boxes in spawn order.
#[derive(Debug, Clone, Default)]
pub struct BoxCollection {
    boxes: Vec<Entity>,
}

impl BoxCollection {
    pub fn push(&mut self, entity: Entity) {
        self.boxes.push(entity);
    }

    /// Remove `entity`. Returns false if it was not in the collection.
    pub fn remove(&mut self, entity: Entity) -> bool {
        if let Some(index) = self.boxes.iter().position(|e| *e == entity) {
            self.boxes.remove(index);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.boxes.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.boxes.iter().copied()
    }
}

#[derive(Resource, Debug, Clone)]
pub struct GameSession {
    pub player: Entity,
    pub pencil: Entity,
    pub boxes: BoxCollection,
}

impl GameSession {
    pub fn new(player: Entity, pencil: Entity) -> Self {
        Self {
            player,
            pencil,
            boxes: BoxCollection::default(),
        }
    }
}
