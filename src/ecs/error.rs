use thiserror::Error;

use super::entity::EntityId;

#[derive(Debug, Error)]
pub enum EcsError {
    #[error("cannot register component kind {kind}: capacity of {capacity} kinds exhausted")]
    CapacityExceeded {
        kind: &'static str,
        capacity: usize,
    },
    #[error("component {kind} was already added to entity {entity}")]
    DuplicateComponent {
        kind: &'static str,
        entity: EntityId,
    },
    #[error("component {kind} is not present on entity {entity}")]
    ComponentNotFound {
        kind: &'static str,
        entity: EntityId,
    },
}
