pub mod components;
pub mod ecs;
pub mod engine;
pub mod scene;

pub use ecs::{
    Component, EcsError, Entity, EntityContext, EntityId, KindId, Manager, TypeRegistry,
    MAX_COMPONENT_KINDS,
};
pub use engine::{Engine, EngineSettings, FrameSummary, RunSummary};
pub use scene::{Scene, SceneLoader};
