use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tricolor_core::io::{load_channel_set, DirectorySink};
use tricolor_core::manifest::Manifest;
use tricolor_core::pipeline::process_observation;

use crate::summary::print_observation_summary;

#[derive(Args)]
pub struct RunArgs {
    /// Observation folder containing config.json and the channel images
    pub path: PathBuf,

    /// Offset search radius in pixels. The search only runs when this
    /// exceeds the radius already recorded in config.json.
    #[arg(long, default_value = "0")]
    pub radius: u32,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let manifest_path = args.path.join("config.json");
    let manifest = Manifest::load(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;

    let set = load_channel_set(&args.path, &manifest)
        .with_context(|| format!("Failed to load observation {}", args.path.display()))?;

    let mut sink = DirectorySink::new(&args.path);
    let report = process_observation(&set, &manifest, args.radius, &mut sink)
        .with_context(|| format!("Failed to process observation {}", args.path.display()))?;

    print_observation_summary(&args.path, &report);
    Ok(())
}
