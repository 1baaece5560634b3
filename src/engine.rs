//! Frame loop driver
//!
//! Issues the canonical per-frame sequence on a manager: update, then draw,
//! then refresh. Timing per phase is collected so embedders and tests can see
//! where a frame went.

use std::time::Instant;

use crate::ecs::{Manager, TypeRegistry};

pub struct EngineSettings {
    pub scene_name: String,
    /// Emit an info-level population report every this many frames; 0 disables.
    pub report_every: u64,
}

/// What one frame did.
#[derive(Clone, Debug)]
pub struct FrameSummary {
    pub frame: u64,
    pub entities: usize,
    pub removed: usize,
    pub update_ms: f64,
    pub draw_ms: f64,
}

/// Totals for a whole run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub frames: u64,
    pub entities_remaining: usize,
    pub entities_removed: usize,
}

pub struct Engine {
    settings: EngineSettings,
    frames_run: u64,
}

impl Engine {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            frames_run: 0,
        }
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Runs `frames` frames against the given population.
    pub fn run(
        &mut self,
        registry: &TypeRegistry,
        manager: &mut Manager,
        frames: u64,
    ) -> RunSummary {
        self.run_with_hook(registry, manager, frames, |_| {})
    }

    /// Like [`run`](Self::run), with an observer invoked after every frame.
    pub fn run_with_hook(
        &mut self,
        registry: &TypeRegistry,
        manager: &mut Manager,
        frames: u64,
        mut hook: impl FnMut(&FrameSummary),
    ) -> RunSummary {
        let mut total_removed = 0;
        for _ in 0..frames {
            self.frames_run += 1;

            let update_start = Instant::now();
            manager.update(registry);
            let update_ms = update_start.elapsed().as_secs_f64() * 1_000.0;

            let draw_start = Instant::now();
            manager.draw(registry);
            let draw_ms = draw_start.elapsed().as_secs_f64() * 1_000.0;

            let removed = manager.refresh();
            total_removed += removed;

            let summary = FrameSummary {
                frame: self.frames_run,
                entities: manager.entity_count(),
                removed,
                update_ms,
                draw_ms,
            };
            log::debug!(
                "frame {}: {} entities, {} removed, update {:.3}ms, draw {:.3}ms",
                summary.frame,
                summary.entities,
                summary.removed,
                summary.update_ms,
                summary.draw_ms
            );
            if self.settings.report_every != 0 && self.frames_run % self.settings.report_every == 0
            {
                log::info!(
                    "{}: frame {}, {} entities alive",
                    self.settings.scene_name,
                    summary.frame,
                    summary.entities
                );
            }
            hook(&summary);
        }

        RunSummary {
            frames,
            entities_remaining: manager.entity_count(),
            entities_removed: total_removed,
        }
    }
}
