use super::{CompositeImage, Compositor};
use crate::channel_set::ChannelSet;
use crate::filter::{Filter, FILTERS};

/// Linear blend with every channel read passed through its registration
/// offset. Integer-shift lookup only, no interpolation.
///
/// Output bounds are the intersection of the three shifted channel bounds,
/// so no read ever leaves a plane.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlignedBlendCompositor;

impl Compositor for AlignedBlendCompositor {
    fn name(&self) -> &'static str {
        "v3"
    }

    fn composite(&self, channels: &ChannelSet) -> CompositeImage {
        let mut bounds = channels.bounds();
        for filter in FILTERS {
            let ch = channels.channel(filter);
            bounds = bounds.intersect(&ch.plane.bounds().translate(ch.offset.x, ch.offset.y));
        }

        let mut image = CompositeImage::blank(bounds);
        for y in bounds.min_y..bounds.max_y {
            for x in bounds.min_x..bounds.max_x {
                let value = |filter: Filter| {
                    let ch = channels.channel(filter);
                    ch.plane.sample_shifted(x, y, ch.offset)
                };
                image.set_pixel(
                    x,
                    y,
                    [value(Filter::Red), value(Filter::Green), value(Filter::Blue)],
                );
            }
        }
        image
    }
}
