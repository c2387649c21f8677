use std::fmt;

use ndarray::Array2;

use crate::channel_set::Offset;

/// Integer pixel rectangle: min corner inclusive, max corner exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds of a `width` x `height` plane anchored at the origin.
    pub fn of_size(width: usize, height: usize) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    pub fn width(&self) -> usize {
        (self.max_x - self.min_x).max(0) as usize
    }

    pub fn height(&self) -> usize {
        (self.max_y - self.min_y).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Bounds {
        Bounds::new(
            self.min_x + dx,
            self.min_y + dy,
            self.max_x + dx,
            self.max_y + dy,
        )
    }

    /// Rectangular intersection. The result may be empty.
    pub fn intersect(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.max(other.min_x),
            self.min_y.max(other.min_y),
            self.max_x.min(other.max_x),
            self.max_y.min(other.max_y),
        )
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

/// A single-channel intensity image.
///
/// Pixel data is 8-bit, row-major, shape = (height, width), addressed in the
/// absolute coordinate frame given by `bounds`. Planes are immutable once
/// built; registration translates a plane's coordinate frame instead of
/// resampling pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelPlane {
    bounds: Bounds,
    data: Array2<u8>,
}

impl ChannelPlane {
    pub fn new(bounds: Bounds, data: Array2<u8>) -> Self {
        assert_eq!(
            data.dim(),
            (bounds.height(), bounds.width()),
            "pixel buffer does not match bounds"
        );
        Self { bounds, data }
    }

    /// All-zero plane covering `bounds`.
    pub fn zeros(bounds: Bounds) -> Self {
        Self {
            data: Array2::from_elem((bounds.height(), bounds.width()), 0),
            bounds,
        }
    }

    /// Build a plane by evaluating `f` at every absolute coordinate.
    pub fn from_fn(bounds: Bounds, f: impl Fn(i32, i32) -> u8) -> Self {
        let mut plane = Self::zeros(bounds);
        for y in bounds.min_y..bounds.max_y {
            for x in bounds.min_x..bounds.max_x {
                plane.set(x, y, f(x, y));
            }
        }
        plane
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> usize {
        self.bounds.width()
    }

    pub fn height(&self) -> usize {
        self.bounds.height()
    }

    /// Intensity at absolute coordinate (x, y).
    ///
    /// The coordinate must lie within `bounds`; staying inside is the
    /// caller's contract (overlap regions are computed before sampling).
    pub fn sample(&self, x: i32, y: i32) -> u8 {
        self.data[[(y - self.bounds.min_y) as usize, (x - self.bounds.min_x) as usize]]
    }

    /// Intensity at (x, y) after translating this plane by `offset`.
    pub fn sample_shifted(&self, x: i32, y: i32, offset: Offset) -> u8 {
        self.sample(x - offset.x, y - offset.y)
    }

    pub(crate) fn set(&mut self, x: i32, y: i32, value: u8) {
        self.data[[(y - self.bounds.min_y) as usize, (x - self.bounds.min_x) as usize]] = value;
    }
}
