mod common;

use common::plane_of;
use tricolor_core::channel_set::ChannelSet;
use tricolor_core::composite::{Compositor, LinearBlendCompositor};
use tricolor_core::error::TricolorError;
use tricolor_core::io::{load_gray, save_gray, save_rgb};

#[test]
fn test_gray_png_round_trip_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plane.png");

    let plane = plane_of(7, 5, |x, y| (x * 13 + y * 29) as u8);
    save_gray(&plane, &path).unwrap();
    let loaded = load_gray(&path).unwrap();
    assert_eq!(loaded, plane);
}

#[test]
fn test_color_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("color.png");

    let set = ChannelSet::new(
        plane_of(4, 4, |_, _| 10),
        plane_of(4, 4, |_, _| 20),
        plane_of(4, 4, |_, _| 30),
    )
    .unwrap();
    save_rgb(&LinearBlendCompositor.composite(&set), &path).unwrap();

    match load_gray(&path) {
        Err(TricolorError::Decode { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Decode error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_a_decode_error_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.png");
    match load_gray(&path) {
        Err(TricolorError::Decode { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Decode error, got {other:?}"),
    }
}
