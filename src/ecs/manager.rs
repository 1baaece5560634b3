//! Manager - owner of the entity population
//!
//! Holds entities in insertion order, fans update/draw out to all of them,
//! and compacts the inactive ones on `refresh`.

use super::entity::{Entity, EntityId};
use super::registry::TypeRegistry;

#[derive(Default)]
pub struct Manager {
    entities: Vec<Entity>,
    next_id: u64,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh entity, appends it to the population, and returns it
    /// for component attachment. The entity stays owned by the manager until
    /// a `refresh` removes it.
    pub fn add_entity(&mut self) -> &mut Entity {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(Entity::new(id));
        self.entities.last_mut().expect("entity pushed above")
    }

    /// Runs `update` on every held entity, active or not, in population order.
    pub fn update(&mut self, registry: &TypeRegistry) {
        for entity in &mut self.entities {
            entity.update(registry);
        }
    }

    /// Runs `draw` on every held entity, active or not, in population order.
    pub fn draw(&mut self, registry: &TypeRegistry) {
        for entity in &mut self.entities {
            entity.draw(registry);
        }
    }

    /// Removes every inactive entity, preserving the relative order of the
    /// survivors, and returns how many were dropped. Safe to call when there
    /// is nothing to remove.
    pub fn refresh(&mut self) -> usize {
        let before = self.entities.len();
        self.entities.retain(Entity::is_active);
        before - self.entities.len()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id() == id)
    }
}
