use std::any::Any;

use crate::ecs::{Component, EntityContext};

use super::Transform;

/// Per-frame displacement applied to the sibling [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub dx: f32,
    pub dy: f32,
}

impl Velocity {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

impl Component for Velocity {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn init(&mut self, ctx: &mut EntityContext<'_>) {
        if !ctx.has::<Transform>() {
            log::warn!(
                "velocity attached to entity {} without a transform; it will have no effect",
                ctx.owner()
            );
        }
    }

    fn update(&mut self, ctx: &mut EntityContext<'_>) {
        if let Some(transform) = ctx.get_mut::<Transform>() {
            transform.x += self.dx;
            transform.y += self.dy;
        }
    }
}
