use std::path::Path;

use image::{DynamicImage, GrayImage, RgbImage};
use ndarray::Array2;

use crate::composite::CompositeImage;
use crate::error::{Result, TricolorError};
use crate::plane::{Bounds, ChannelPlane};

/// Load a single-channel source image from disk.
///
/// Non-grayscale input is a decode error: color previews can't be split
/// into filter channels after the fact, so they are rejected up front with
/// the offending filename.
pub fn load_gray(path: &Path) -> Result<ChannelPlane> {
    let img = image::open(path).map_err(|e| TricolorError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    gray_plane(img, path)
}

/// Convert a decoded image into a plane, rejecting non-grayscale data.
/// `path` only provides error context.
pub fn gray_plane(img: DynamicImage, path: &Path) -> Result<ChannelPlane> {
    let gray = match img {
        DynamicImage::ImageLuma8(gray) => gray,
        other => {
            return Err(TricolorError::Decode {
                path: path.to_path_buf(),
                reason: format!("image is not grayscale ({:?})", other.color()),
            })
        }
    };

    let (w, h) = gray.dimensions();
    let data = Array2::from_shape_vec((h as usize, w as usize), gray.into_raw())
        .expect("buffer size matches dimensions");
    Ok(ChannelPlane::new(Bounds::of_size(w as usize, h as usize), data))
}

/// Save a plane as an 8-bit grayscale image; format follows the extension.
pub fn save_gray(plane: &ChannelPlane, path: &Path) -> Result<()> {
    let bounds = plane.bounds();
    let mut img = GrayImage::new(bounds.width() as u32, bounds.height() as u32);
    for y in bounds.min_y..bounds.max_y {
        for x in bounds.min_x..bounds.max_x {
            img.put_pixel(
                (x - bounds.min_x) as u32,
                (y - bounds.min_y) as u32,
                image::Luma([plane.sample(x, y)]),
            );
        }
    }
    img.save(path)?;
    Ok(())
}

/// Save a composite as an 8-bit RGB image; format follows the extension.
pub fn save_rgb(composite: &CompositeImage, path: &Path) -> Result<()> {
    let bounds = composite.bounds();
    let mut img = RgbImage::new(bounds.width() as u32, bounds.height() as u32);
    for y in bounds.min_y..bounds.max_y {
        for x in bounds.min_x..bounds.max_x {
            img.put_pixel(
                (x - bounds.min_x) as u32,
                (y - bounds.min_y) as u32,
                image::Rgb(composite.pixel(x, y)),
            );
        }
    }
    img.save(path)?;
    Ok(())
}
