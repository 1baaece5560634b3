use std::any::Any;

use crate::ecs::{Component, EntityContext};

use super::Transform;

/// Presentation stand-in: a real renderer would blit a texture here. This one
/// counts draw calls and traces where the sprite would land.
#[derive(Debug)]
pub struct Sprite {
    label: String,
    frames_drawn: u64,
}

impl Sprite {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            frames_drawn: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl Component for Sprite {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn draw(&mut self, ctx: &mut EntityContext<'_>) {
        self.frames_drawn += 1;
        if let Some(transform) = ctx.get::<Transform>() {
            log::trace!(
                "draw {} at ({:.1}, {:.1})",
                self.label,
                transform.x,
                transform.y
            );
        } else {
            log::trace!("draw {} (no transform)", self.label);
        }
    }
}
