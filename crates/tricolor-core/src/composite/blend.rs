use super::{CompositeImage, Compositor};
use crate::channel_set::ChannelSet;
use crate::filter::Filter;

/// Direct per-pixel channel-to-channel mapping: output RGB is the (red,
/// green, blue) channel intensities at the same coordinate. Commutative and
/// order-independent; the numerically correct compositor when the channels
/// carry no registration error.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearBlendCompositor;

impl Compositor for LinearBlendCompositor {
    fn name(&self) -> &'static str {
        "v2"
    }

    fn composite(&self, channels: &ChannelSet) -> CompositeImage {
        let bounds = channels.bounds();
        let mut image = CompositeImage::blank(bounds);
        for y in bounds.min_y..bounds.max_y {
            for x in bounds.min_x..bounds.max_x {
                image.set_pixel(
                    x,
                    y,
                    [
                        channels.plane(Filter::Red).sample(x, y),
                        channels.plane(Filter::Green).sample(x, y),
                        channels.plane(Filter::Blue).sample(x, y),
                    ],
                );
            }
        }
        image
    }
}
