use std::path::PathBuf;

use tracing::info;

use crate::composite::CompositeImage;
use crate::error::Result;
use crate::io::image_io::{save_gray, save_rgb};
use crate::manifest::Manifest;
use crate::pipeline::ObservationSink;
use crate::plane::ChannelPlane;

/// Filesystem-backed sink: logical name `n` becomes `output_<n>.jpg` in the
/// observation directory, the manifest goes to `config.json`.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn output_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("output_{name}.jpg"))
    }
}

impl ObservationSink for DirectorySink {
    fn write_composite(&mut self, name: &str, image: &CompositeImage) -> Result<()> {
        let path = self.output_path(name);
        info!(path = %path.display(), "writing composite");
        save_rgb(image, &path)
    }

    fn write_diagnostic(&mut self, name: &str, plane: &ChannelPlane) -> Result<()> {
        let path = self.output_path(name);
        info!(path = %path.display(), "writing diagnostic");
        save_gray(plane, &path)
    }

    fn persist_manifest(&mut self, manifest: &Manifest) -> Result<()> {
        manifest.save(&self.dir.join("config.json"))
    }
}
