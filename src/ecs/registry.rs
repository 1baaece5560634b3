//! Component kind registration
//!
//! Each distinct component type gets a small stable index on first use. The
//! index doubles as the entity-side slot/bit position, so the kind count is
//! capped at `MAX_COMPONENT_KINDS` and enforced here at registration time.

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use super::component::Component;
use super::error::EcsError;

/// Upper bound on distinct component kinds a program may register.
pub const MAX_COMPONENT_KINDS: usize = 32;

/// Stable index of a registered component kind, assigned in first-use order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindId(usize);

impl KindId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Hands out `KindId`s. One registry per container world; created at startup
/// and passed explicitly wherever kind resolution is needed.
#[derive(Default)]
pub struct TypeRegistry {
    ids: HashMap<TypeId, KindId>,
    names: Vec<&'static str>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the kind id for `C`, assigning the next free one on first use.
    pub fn id_of<C: Component>(&mut self) -> Result<KindId, EcsError> {
        if let Some(&id) = self.ids.get(&TypeId::of::<C>()) {
            return Ok(id);
        }
        if self.names.len() == MAX_COMPONENT_KINDS {
            return Err(EcsError::CapacityExceeded {
                kind: type_name::<C>(),
                capacity: MAX_COMPONENT_KINDS,
            });
        }
        let id = KindId(self.names.len());
        self.names.push(type_name::<C>());
        self.ids.insert(TypeId::of::<C>(), id);
        Ok(id)
    }

    /// Read-only resolution; `None` when `C` was never registered.
    pub fn lookup<C: Component>(&self) -> Option<KindId> {
        self.ids.get(&TypeId::of::<C>()).copied()
    }

    pub fn kind_count(&self) -> usize {
        self.names.len()
    }

    pub fn name_of(&self, id: KindId) -> &'static str {
        self.names[id.0]
    }
}
