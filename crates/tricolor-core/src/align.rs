use rayon::prelude::*;
use tracing::info;

use crate::channel_set::{ChannelSet, Offset, SearchState};
use crate::diff::difference_score;
use crate::filter::{Filter, REFERENCE_FILTER};
use crate::plane::ChannelPlane;

/// Result of one alignment round: the updated channel set, the state to
/// persist, and the winning scores for diagnostics.
#[derive(Clone, Debug)]
pub struct AlignmentOutcome {
    pub set: ChannelSet,
    pub state: SearchState,
    pub green_score: u64,
    pub red_score: u64,
}

/// Exhaustive offset search for one moving plane against the reference.
///
/// Scans every integer offset with `-radius <= x < radius` and
/// `-radius <= y < radius` (the upper bound is open, asymmetric by one
/// pixel). Radius 0 degenerates to evaluating only (0,0). Ties keep the
/// first minimum in row-major scan order (outer x, inner y), so the result
/// is deterministic regardless of the parallel evaluation below.
pub fn search_offset(
    reference: &ChannelPlane,
    moving: &ChannelPlane,
    radius: u32,
) -> (Offset, u64) {
    let r = radius as i32;
    let mut candidates = Vec::with_capacity(((2 * r) * (2 * r)).max(1) as usize);
    for x in -r..r {
        for y in -r..r {
            candidates.push(Offset::new(x, y));
        }
    }
    if candidates.is_empty() {
        candidates.push(Offset::ZERO);
    }

    let (score, idx) = candidates
        .par_iter()
        .enumerate()
        .map(|(idx, &candidate)| (difference_score(reference, moving, candidate), idx))
        .min_by_key(|&(score, idx)| (score, idx))
        .expect("offset window contains at least one candidate");

    (candidates[idx], score)
}

/// Align the green and red channels independently against the blue
/// reference, blue-green first.
///
/// The input set is untouched; the returned outcome carries a copy with the
/// discovered offsets. Persisting the new [`SearchState`] is the pipeline's
/// responsibility.
pub fn align_channels(set: &ChannelSet, radius: u32) -> AlignmentOutcome {
    let reference = set.plane(REFERENCE_FILTER);

    let (green, green_score) = search_offset(reference, set.plane(Filter::Green), radius);
    info!(filter = %Filter::Green, offset = %green, score = green_score, "best offset");

    let (red, red_score) = search_offset(reference, set.plane(Filter::Red), radius);
    info!(filter = %Filter::Red, offset = %red, score = red_score, "best offset");

    AlignmentOutcome {
        set: set.with_offsets(green, red),
        state: SearchState {
            max_radius: radius,
            green,
            red,
        },
        green_score,
        red_score,
    }
}
