use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use tricolor_core::archive::{group_records, ArchiveClient, ObservationGroup, SearchQuery};
use tricolor_core::channel_set::{ChannelSetBuilder, Offset};
use tricolor_core::composite::{Compositor, LinearBlendCompositor};
use tricolor_core::filter::FILTERS;
use tricolor_core::io::{save_rgb, DirectorySink};
use tricolor_core::manifest::Manifest;
use tricolor_core::pipeline::process_observation;

#[derive(Args)]
pub struct FetchArgs {
    /// Output folder for cached previews, manifests, and composites
    #[arg(short, long)]
    pub output: PathBuf,

    /// Archive camera selection
    #[arg(long, default_value = "Narrow")]
    pub camera: String,

    /// Restrict the search to one target body
    #[arg(long)]
    pub target: Option<String>,

    /// Restrict the search to one observation name
    #[arg(long)]
    pub observation: Option<String>,

    /// Extra raw query parameters appended to the search
    #[arg(long)]
    pub extra: Option<String>,

    /// Offset search radius applied to each fetched observation
    /// (0 skips alignment)
    #[arg(long, default_value = "0")]
    pub radius: u32,
}

pub fn run(args: &FetchArgs) -> Result<()> {
    let query = SearchQuery {
        camera: args.camera.clone(),
        target: args.target.clone(),
        observation: args.observation.clone(),
        extra: args.extra.clone(),
    };

    let client = ArchiveClient::new()?;
    let records = client.search(&query).context("Archive search failed")?;
    let groups = group_records(&records);
    println!(
        "Found {} records forming {} complete observations",
        records.len(),
        groups.len()
    );

    fs::create_dir_all(args.output.join("results"))?;

    let bar = ProgressBar::new(groups.len() as u64).with_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}").expect("valid template"),
    );

    let mut fetched = 0usize;
    for group in &groups {
        bar.set_message(group.key.clone());
        // One bad observation never aborts the batch.
        match fetch_observation(&client, group, &args.output, args.radius) {
            Ok(()) => fetched += 1,
            Err(e) => warn!(observation = %group.key, error = %e, "skipping observation"),
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    println!("Composited {fetched}/{} observations into {}", groups.len(), args.output.display());
    Ok(())
}

/// Download one observation's previews (cache-aware), write its fresh
/// manifest, emit a linear-blend preview composite, and optionally run the
/// full alignment pipeline on it.
fn fetch_observation(
    client: &ArchiveClient,
    group: &ObservationGroup,
    out_root: &Path,
    radius: u32,
) -> Result<()> {
    let obs_dir = out_root.join(&group.key);
    fs::create_dir_all(&obs_dir)?;

    let mut builder = ChannelSetBuilder::default();
    let mut files = Vec::with_capacity(FILTERS.len());
    for filter in FILTERS {
        let id = group.archive_id(filter);
        let filename = format!("{id}.jpg");
        let plane = client.fetch_preview(id, &obs_dir.join(&filename))?;
        builder.insert(filter, plane, Offset::ZERO)?;
        files.push((filter, filename));
    }
    let set = builder.build()?;

    let manifest = Manifest::fresh(files);
    manifest.save(&obs_dir.join("config.json"))?;

    let blend = LinearBlendCompositor.composite(&set);
    save_rgb(&blend, &obs_dir.join(format!("{}.jpg", group.key)))?;
    save_rgb(&blend, &out_root.join("results").join(format!("{}.jpg", group.key)))?;

    if radius > 0 {
        let mut sink = DirectorySink::new(&obs_dir);
        process_observation(&set, &manifest, radius, &mut sink)?;
    }
    Ok(())
}
