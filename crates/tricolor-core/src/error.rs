use std::path::PathBuf;

use thiserror::Error;

use crate::filter::Filter;
use crate::plane::Bounds;

#[derive(Error, Debug)]
pub enum TricolorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("observation is missing filter {0}")]
    MissingFilter(Filter),

    #[error("observation has more than one {0} channel")]
    DuplicateFilter(Filter),

    #[error("channel {filter} has bounds {got} but other channels have {expected}")]
    BoundsMismatch {
        filter: Filter,
        got: Bounds,
        expected: Bounds,
    },

    #[error("cannot decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("manifest {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },

    #[error("archive request {url}: {reason}")]
    Archive { url: String, reason: String },

    #[error("image format error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, TricolorError>;
