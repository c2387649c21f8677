use crate::channel_set::Offset;
use crate::consts::{DELTA_IGNORE_HIGH, DELTA_IGNORE_LOW};
use crate::plane::ChannelPlane;

/// Outlier-dampened dissimilarity between two planes at a candidate offset.
///
/// The overlap region is the base bounds intersected with the layer bounds
/// translated by `offset`. For every overlap pixel the absolute intensity
/// delta is taken, sampling the layer at the back-translated coordinate.
/// Deltas strictly inside (`DELTA_IGNORE_LOW`, `DELTA_IGNORE_HIGH`) are
/// excluded from the score.
///
/// An empty overlap scores 0, which is indistinguishable from a perfect
/// match. Callers must keep the search radius well inside the plane
/// dimensions; the metric does not guard against it.
///
/// Returns the diagnostic delta plane (sized to the overlap) and the score.
pub fn difference(base: &ChannelPlane, layer: &ChannelPlane, offset: Offset) -> (ChannelPlane, u64) {
    let overlap = base
        .bounds()
        .intersect(&layer.bounds().translate(offset.x, offset.y));
    let mut diag = ChannelPlane::zeros(overlap);
    let mut score = 0u64;
    for y in overlap.min_y..overlap.max_y {
        for x in overlap.min_x..overlap.max_x {
            let delta = base.sample(x, y).abs_diff(layer.sample_shifted(x, y, offset));
            diag.set(x, y, delta);
            score += scored(delta);
        }
    }
    (diag, score)
}

/// Score-only variant of [`difference`], skipping the diagnostic plane.
pub fn difference_score(base: &ChannelPlane, layer: &ChannelPlane, offset: Offset) -> u64 {
    let overlap = base
        .bounds()
        .intersect(&layer.bounds().translate(offset.x, offset.y));
    let mut score = 0u64;
    for y in overlap.min_y..overlap.max_y {
        for x in overlap.min_x..overlap.max_x {
            score += scored(base.sample(x, y).abs_diff(layer.sample_shifted(x, y, offset)));
        }
    }
    score
}

fn scored(delta: u8) -> u64 {
    if delta > DELTA_IGNORE_LOW && delta < DELTA_IGNORE_HIGH {
        0
    } else {
        delta as u64
    }
}
