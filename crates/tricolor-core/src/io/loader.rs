use std::path::Path;

use tracing::info;

use crate::channel_set::{ChannelSet, ChannelSetBuilder};
use crate::error::Result;
use crate::io::image_io::load_gray;
use crate::manifest::Manifest;

/// Build a validated channel set from a manifest rooted at `dir`.
///
/// Every named file must decode as grayscale; the builder enforces filter
/// completeness and identical bounds across the channels.
pub fn load_channel_set(dir: &Path, manifest: &Manifest) -> Result<ChannelSet> {
    let mut builder = ChannelSetBuilder::default();
    for entry in &manifest.files {
        let path = dir.join(&entry.filename);
        info!(file = %path.display(), filter = %entry.filter, "reading channel");
        let plane = load_gray(&path)?;
        builder.insert(entry.filter, plane, entry.offset())?;
    }
    builder.build()
}
