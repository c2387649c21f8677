use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::channel_set::{Offset, SearchState};
use crate::error::{Result, TricolorError};
use crate::filter::Filter;

/// One source file entry in an observation manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub filename: String,
    pub filter: Filter,
    #[serde(default)]
    pub offset_x: i32,
    #[serde(default)]
    pub offset_y: i32,
}

impl ManifestEntry {
    pub fn offset(&self) -> Offset {
        Offset::new(self.offset_x, self.offset_y)
    }
}

/// Per-observation `config.json`: which file carries which filter, the
/// stored per-channel offsets, and the search radius already explored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub max_offset: u32,
    pub files: Vec<ManifestEntry>,
}

impl Manifest {
    /// Fresh manifest with zero offsets for the given (filter, filename)
    /// pairs, as written after an archive fetch.
    pub fn fresh(files: impl IntoIterator<Item = (Filter, String)>) -> Self {
        Self {
            max_offset: 0,
            files: files
                .into_iter()
                .map(|(filter, filename)| ManifestEntry {
                    filename,
                    filter,
                    offset_x: 0,
                    offset_y: 0,
                })
                .collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Manifest> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| TricolorError::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        info!(path = %path.display(), "writing manifest");
        let json = serde_json::to_string_pretty(self).map_err(|e| TricolorError::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn entry(&self, filter: Filter) -> Option<&ManifestEntry> {
        self.files.iter().find(|e| e.filter == filter)
    }

    /// Copy of this manifest with the offsets and radius from a finished
    /// search round. The radius never shrinks.
    pub fn with_search_state(&self, state: &SearchState) -> Manifest {
        let mut updated = self.clone();
        updated.max_offset = updated.max_offset.max(state.max_radius);
        for entry in &mut updated.files {
            let offset = match entry.filter {
                Filter::Blue => Offset::ZERO,
                Filter::Green => state.green,
                Filter::Red => state.red,
            };
            entry.offset_x = offset.x;
            entry.offset_y = offset.y;
        }
        updated
    }
}
