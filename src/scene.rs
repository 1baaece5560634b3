//! Scene files - declarative initial populations
//!
//! A scene is a YAML document naming the entities to spawn and which stock
//! components each one starts with.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::components::{Lifetime, Sprite, Transform, Velocity};
use crate::ecs::{Manager, TypeRegistry};

fn default_frames() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_frames")]
    pub frames: u64,
    pub entities: Vec<SceneEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SceneEntity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub transform: Option<TransformInit>,
    #[serde(default)]
    pub velocity: Option<VelocityInit>,
    #[serde(default)]
    pub lifetime: Option<u64>,
    #[serde(default)]
    pub sprite: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TransformInit {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VelocityInit {
    pub dx: f32,
    pub dy: f32,
}

pub struct SceneLoader {
    base_dir: PathBuf,
}

impl SceneLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scene> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        let scene: Scene = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(scene)
    }
}

impl Scene {
    /// Spawns every declared entity into `manager`. An entity that declares
    /// no components at all is a mistake in the scene file and is rejected.
    pub fn populate(&self, registry: &mut TypeRegistry, manager: &mut Manager) -> Result<()> {
        for (index, decl) in self.entities.iter().enumerate() {
            let label = decl
                .name
                .clone()
                .unwrap_or_else(|| format!("entity #{index}"));
            if decl.transform.is_none()
                && decl.velocity.is_none()
                && decl.lifetime.is_none()
                && decl.sprite.is_none()
            {
                bail!("scene '{}': {} declares no components", self.name, label);
            }

            let entity = manager.add_entity();
            if let Some(t) = decl.transform {
                entity
                    .add_component(registry, Transform::new(t.x, t.y))
                    .with_context(|| format!("spawning {label}"))?;
            }
            if let Some(v) = decl.velocity {
                entity
                    .add_component(registry, Velocity::new(v.dx, v.dy))
                    .with_context(|| format!("spawning {label}"))?;
            }
            if let Some(frames) = decl.lifetime {
                entity
                    .add_component(registry, Lifetime::frames(frames))
                    .with_context(|| format!("spawning {label}"))?;
            }
            if let Some(sprite_label) = &decl.sprite {
                entity
                    .add_component(registry, Sprite::new(sprite_label.clone()))
                    .with_context(|| format!("spawning {label}"))?;
            }
        }
        log::debug!(
            "scene '{}' spawned {} entities",
            self.name,
            self.entities.len()
        );
        Ok(())
    }

    pub fn frames(&self, override_frames: Option<u64>) -> u64 {
        override_frames.unwrap_or(self.frames)
    }
}
