use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use stagehand::{
    engine::{Engine, EngineSettings},
    scene::SceneLoader,
    Manager, TypeRegistry,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Headless scene runner")]
struct Cli {
    /// Path to the scene YAML file
    #[arg(long, default_value = "scenes/drifters.yaml")]
    scene: PathBuf,

    /// Override frame count (uses scene default when omitted)
    #[arg(long)]
    frames: Option<u64>,

    /// Log a population report every N frames (0 disables)
    #[arg(long, default_value_t = 60)]
    report_every: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let loader = SceneLoader::new(".");
    let scene = loader.load(&cli.scene)?;

    let mut registry = TypeRegistry::new();
    let mut manager = Manager::new();
    scene.populate(&mut registry, &mut manager)?;

    let mut engine = Engine::new(EngineSettings {
        scene_name: scene.name.clone(),
        report_every: cli.report_every,
    });
    let summary = engine.run(&registry, &mut manager, scene.frames(cli.frames));

    println!(
        "Scene '{}' ran {} frames. {} entities remain, {} removed.",
        scene.name, summary.frames, summary.entities_remaining, summary.entities_removed
    );
    Ok(())
}
