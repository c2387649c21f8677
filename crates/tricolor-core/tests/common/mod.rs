#![allow(dead_code)]

use tricolor_core::plane::{Bounds, ChannelPlane};

/// Build a plane anchored at the origin by evaluating `f` at every pixel.
pub fn plane_of(width: usize, height: usize, f: impl Fn(i32, i32) -> u8) -> ChannelPlane {
    ChannelPlane::from_fn(Bounds::of_size(width, height), f)
}

/// All-zero plane with a single bright (255) pixel at (bx, by).
pub fn single_bright(width: usize, height: usize, bx: i32, by: i32) -> ChannelPlane {
    plane_of(width, height, |x, y| if (x, y) == (bx, by) { 255 } else { 0 })
}

/// Uniform plane at the given intensity.
pub fn uniform(width: usize, height: usize, value: u8) -> ChannelPlane {
    plane_of(width, height, |_, _| value)
}
