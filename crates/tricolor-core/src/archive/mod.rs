//! Client for the OPUS planetary-imaging archive.
//!
//! Crawls the search API page by page, clusters returned image metadata
//! into per-observation filter triples, and caches downloaded preview
//! images on local disk.

mod client;
mod group;
mod records;

pub use client::{ArchiveClient, SearchQuery, DEFAULT_API_ROOT};
pub use group::{group_records, ObservationGroup};
pub use records::ImageRecord;
