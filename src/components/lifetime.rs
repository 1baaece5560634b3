use std::any::Any;

use crate::ecs::{Component, EntityContext};

/// Frame countdown that destroys its owner when it reaches zero.
#[derive(Debug, Clone, Copy)]
pub struct Lifetime {
    remaining: u64,
}

impl Lifetime {
    pub fn frames(remaining: u64) -> Self {
        Self { remaining }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Component for Lifetime {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn update(&mut self, ctx: &mut EntityContext<'_>) {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            ctx.destroy();
        }
    }
}
