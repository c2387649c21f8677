use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use crate::consts::ARCHIVE_PAGE_SIZE;
use crate::error::{Result, TricolorError};
use crate::io::image_io::gray_plane;
use crate::plane::ChannelPlane;

use super::records::{translate_page, DataPage, ImageRecord};

pub const DEFAULT_API_ROOT: &str = "https://tools.pds-rings.seti.org/opus/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Search parameters for an archive crawl.
///
/// The instrument, filter set, ordering, column list, and page size are
/// fixed; only the camera and the optional narrowing parameters vary.
#[derive(Clone, Debug)]
pub struct SearchQuery {
    /// Camera selection, e.g. "Narrow" or "Wide".
    pub camera: String,
    pub target: Option<String>,
    pub observation: Option<String>,
    /// Extra raw query parameters appended verbatim.
    pub extra: Option<String>,
}

impl SearchQuery {
    pub fn new(camera: impl Into<String>) -> Self {
        Self {
            camera: camera.into(),
            target: None,
            observation: None,
            extra: None,
        }
    }

    fn params(&self) -> String {
        let mut params = format!(
            "instrumentid=Cassini+ISS&typeid=Image\
             &FILTER=BL1,GRN,RED\
             &order=time1\
             &cols=ringobsid,obsname,filter,time1\
             &camera={}+Angle\
             &limit={}",
            self.camera, ARCHIVE_PAGE_SIZE
        );
        if let Some(target) = &self.target {
            params.push_str(&format!("&target={target}"));
        }
        if let Some(observation) = &self.observation {
            params.push_str(&format!("&obsname={observation}"));
        }
        if let Some(extra) = &self.extra {
            params.push_str(&format!("&{extra}"));
        }
        params
    }
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    data: Vec<CountResult>,
}

#[derive(Debug, Deserialize)]
struct CountResult {
    result_count: usize,
}

#[derive(Debug, Deserialize)]
struct FilesResponse {
    data: HashMap<String, FileSet>,
}

#[derive(Debug, Default, Deserialize)]
struct FileSet {
    #[serde(rename = "preview_image", default)]
    preview_images: Vec<String>,
}

/// Blocking HTTP client for the archive, with on-disk preview caching.
pub struct ArchiveClient {
    root: String,
    client: reqwest::blocking::Client,
}

impl ArchiveClient {
    pub fn new() -> Result<Self> {
        Self::with_root(DEFAULT_API_ROOT)
    }

    pub fn with_root(root: impl Into<String>) -> Result<Self> {
        let root = root.into();
        let client = reqwest::blocking::Client::builder()
            .user_agent(format!("tricolor/{}", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TricolorError::Archive {
                url: root.clone(),
                reason: format!("building HTTP client: {e}"),
            })?;
        Ok(Self { root, client })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "archive request");
        self.client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json::<T>())
            .map_err(|e| TricolorError::Archive {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "archive download");
        self.client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.bytes())
            .map(|b| b.to_vec())
            .map_err(|e| TricolorError::Archive {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Total result count for a query.
    pub fn result_count(&self, query: &SearchQuery) -> Result<usize> {
        let url = format!("{}/meta/result_count.json?{}", self.root, query.params());
        let response: CountResponse = self.get_json(&url)?;
        response
            .data
            .first()
            .map(|r| r.result_count)
            .ok_or_else(|| TricolorError::Archive {
                url,
                reason: "empty result count response".to_string(),
            })
    }

    /// Crawl every page of a search, returning records in archive order
    /// (ascending acquisition time, so grouping sees them consecutively).
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<ImageRecord>> {
        let count = self.result_count(query)?;
        info!(count, "images in search");

        let base = format!("{}/data.json?{}", self.root, query.params());
        let mut records = Vec::with_capacity(count);
        for page_no in 1..=count / ARCHIVE_PAGE_SIZE + 1 {
            let url = format!("{base}&page={page_no}");
            let page: DataPage = self.get_json(&url)?;
            records.extend(translate_page(&url, &page)?);
        }
        Ok(records)
    }

    /// Resolve the full-size JPEG preview URL for an archive id.
    pub fn preview_url(&self, archive_id: &str) -> Result<String> {
        let url = format!("{}/files/{}.json", self.root, archive_id);
        let response: FilesResponse = self.get_json(&url)?;
        let files = response.data.get(archive_id).map(|f| &f.preview_images);
        files
            .and_then(|f| f.iter().find(|p| p.ends_with("full.jpg")))
            .cloned()
            .ok_or_else(|| TricolorError::Archive {
                url,
                reason: format!("no full preview image for {archive_id}"),
            })
    }

    /// Fetch the grayscale preview for an archive id, caching the raw bytes
    /// at `cache_path`. A cache hit skips the network entirely.
    pub fn fetch_preview(&self, archive_id: &str, cache_path: &Path) -> Result<ChannelPlane> {
        if cache_path.exists() {
            debug!(path = %cache_path.display(), "preview cache hit");
            return crate::io::image_io::load_gray(cache_path);
        }

        let url = self.preview_url(archive_id)?;
        info!(url, "downloading preview");
        let bytes = self.get_bytes(&url)?;

        let img = image::load_from_memory(&bytes).map_err(|e| TricolorError::Decode {
            path: cache_path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let plane = gray_plane(img, cache_path)?;

        if let Some(parent) = cache_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(cache_path, &bytes)?;

        Ok(plane)
    }
}
