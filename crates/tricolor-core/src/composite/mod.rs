mod aligned;
mod blend;
mod mask_overlay;

pub use aligned::AlignedBlendCompositor;
pub use blend::LinearBlendCompositor;
pub use mask_overlay::MaskOverlayCompositor;

use ndarray::Array2;

use crate::channel_set::ChannelSet;
use crate::plane::Bounds;

/// An RGB image produced by one compositor variant. Write-once: built by a
/// compositor, handed to the output collaborator, then discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeImage {
    bounds: Bounds,
    data: Array2<[u8; 3]>,
}

impl CompositeImage {
    /// All-black image covering `bounds`.
    pub fn blank(bounds: Bounds) -> Self {
        Self {
            data: Array2::from_elem((bounds.height(), bounds.width()), [0, 0, 0]),
            bounds,
        }
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

    /// RGB value at absolute coordinate (x, y).
    pub fn pixel(&self, x: i32, y: i32) -> [u8; 3] {
        self.data[[(y - self.bounds.min_y) as usize, (x - self.bounds.min_x) as usize]]
    }

    pub(crate) fn set_pixel(&mut self, x: i32, y: i32, rgb: [u8; 3]) {
        self.data[[(y - self.bounds.min_y) as usize, (x - self.bounds.min_x) as usize]] = rgb;
    }
}

/// One algorithm turning a channel triple into a color image.
///
/// The pipeline iterates over a configured list of compositors instead of
/// hard-coding call sites; `name` doubles as the logical output name handed
/// to the writer collaborator.
pub trait Compositor {
    fn name(&self) -> &'static str;

    fn composite(&self, channels: &ChannelSet) -> CompositeImage;
}
