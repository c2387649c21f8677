mod common;

use common::{plane_of, single_bright, uniform};
use tricolor_core::channel_set::Offset;
use tricolor_core::diff::{difference, difference_score};
use tricolor_core::plane::Bounds;

#[test]
fn test_self_difference_is_zero() {
    let plane = plane_of(6, 6, |x, y| (x * y) as u8);
    let (diag, score) = difference(&plane, &plane, Offset::ZERO);
    assert_eq!(score, 0);
    for y in 0..6 {
        for x in 0..6 {
            assert_eq!(diag.sample(x, y), 0);
        }
    }
}

#[test]
fn test_low_deltas_are_counted() {
    // Delta 32 is not strictly inside the ignore band, so it counts.
    let (_, score) = difference(&uniform(4, 4, 0), &uniform(4, 4, 32), Offset::ZERO);
    assert_eq!(score, 32 * 16);
}

#[test]
fn test_mid_deltas_are_ignored() {
    // Deltas strictly between 32 and 96 are background mismatch: excluded
    // from the score but still present in the diagnostic plane.
    let (diag, score) = difference(&uniform(4, 4, 0), &uniform(4, 4, 64), Offset::ZERO);
    assert_eq!(score, 0);
    assert_eq!(diag.sample(2, 2), 64);
}

#[test]
fn test_high_deltas_are_counted() {
    let (_, score) = difference(&uniform(4, 4, 0), &uniform(4, 4, 96), Offset::ZERO);
    assert_eq!(score, 96 * 16);
}

#[test]
fn test_offset_shifts_the_overlap() {
    let base = single_bright(6, 6, 2, 2);
    let layer = single_bright(6, 6, 3, 2);
    // Layer translated by (-1,0) brings its bright pixel onto the base's.
    let (diag, score) = difference(&base, &layer, Offset::new(-1, 0));
    assert_eq!(score, 0);
    assert_eq!(diag.bounds(), Bounds::new(0, 0, 5, 6));
    // At zero offset the two bright pixels each mismatch against black.
    let (_, unaligned) = difference(&base, &layer, Offset::ZERO);
    assert_eq!(unaligned, 510);
}

#[test]
fn test_diagnostic_covers_overlap_only() {
    let base = uniform(6, 6, 10);
    let layer = uniform(6, 6, 10);
    let (diag, _) = difference(&base, &layer, Offset::new(2, 1));
    assert_eq!(diag.bounds(), Bounds::new(2, 1, 6, 6));
}

#[test]
fn test_empty_overlap_scores_zero() {
    // Documented degenerate minimum: no overlap is indistinguishable from a
    // perfect match. Search radii must stay well inside plane dimensions.
    let base = uniform(4, 4, 200);
    let layer = uniform(4, 4, 10);
    let (diag, score) = difference(&base, &layer, Offset::new(10, 0));
    assert_eq!(score, 0);
    assert!(diag.bounds().is_empty());
}

#[test]
fn test_score_only_path_matches_full_metric() {
    let base = plane_of(8, 8, |x, y| (x * 3 + y * 7) as u8);
    let layer = plane_of(8, 8, |x, y| (x * 5 + y * 2) as u8);
    for offset in [Offset::ZERO, Offset::new(1, -2), Offset::new(-3, 3)] {
        let (_, full) = difference(&base, &layer, offset);
        assert_eq!(difference_score(&base, &layer, offset), full);
    }
}
