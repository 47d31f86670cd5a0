// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-animator")]
#[command(about = "Headless driver for the scene animator", long_about = None)]
pub struct Cli {
    /// Built-in scene to run: "solar" or "garden"
    #[arg(long, default_value = "solar")]
    pub scene: String,

    /// Load the scene configuration from a JSON file instead
    #[arg(long)]
    pub scene_file: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value = "600")]
    pub ticks: u32,

    /// Fixed frame rate driving the tick delta
    #[arg(long, default_value = "60.0")]
    pub fps: f32,

    /// Initial speed multiplier (clamped by the scene's limits)
    #[arg(long)]
    pub speed: Option<f32>,
}
