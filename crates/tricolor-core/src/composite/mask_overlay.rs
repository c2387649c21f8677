use super::{CompositeImage, Compositor};
use crate::channel_set::ChannelSet;
use crate::filter::{Filter, REFERENCE_FILTER};

/// Draws a solid color layer per filter through an alpha mask derived from
/// that channel's own intensity, over-compositing the layers in a fixed
/// order.
///
/// Over-compositing is not commutative when alpha < 255, so two orderings of
/// the same channels produce visibly different results; the two stock
/// constructors exist to make that ordering sensitivity observable.
#[derive(Clone, Debug)]
pub struct MaskOverlayCompositor {
    name: &'static str,
    order: [Filter; 3],
}

impl MaskOverlayCompositor {
    pub fn new(name: &'static str, order: [Filter; 3]) -> Self {
        Self { name, order }
    }

    /// Blue, then green, then red ("v1 alpha" output).
    pub fn order_bgr() -> Self {
        Self::new("v1_alpha", [Filter::Blue, Filter::Green, Filter::Red])
    }

    /// Red, then green, then blue ("v1 beta" output).
    pub fn order_rgb() -> Self {
        Self::new("v1_beta", [Filter::Red, Filter::Green, Filter::Blue])
    }
}

impl Compositor for MaskOverlayCompositor {
    fn name(&self) -> &'static str {
        self.name
    }

    fn composite(&self, channels: &ChannelSet) -> CompositeImage {
        let bounds = channels.plane(REFERENCE_FILTER).bounds();
        let mut canvas = CompositeImage::blank(bounds);

        for filter in self.order {
            let plane = channels.plane(filter);
            let color = filter.overlay_color();
            for y in bounds.min_y..bounds.max_y {
                for x in bounds.min_x..bounds.max_x {
                    let alpha = plane.sample(x, y) as u32;
                    let dst = canvas.pixel(x, y);
                    let mut out = [0u8; 3];
                    for c in 0..3 {
                        // src over dst with src alpha taken from the mask
                        out[c] =
                            ((color[c] as u32 * alpha + dst[c] as u32 * (255 - alpha)) / 255) as u8;
                    }
                    canvas.set_pixel(x, y, out);
                }
            }
        }

        canvas
    }
}
