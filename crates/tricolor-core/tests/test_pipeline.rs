mod common;

use std::path::Path;

use common::single_bright;
use tricolor_core::channel_set::{ChannelSet, Offset};
use tricolor_core::composite::CompositeImage;
use tricolor_core::error::Result;
use tricolor_core::filter::Filter;
use tricolor_core::io::{load_channel_set, save_gray, DirectorySink};
use tricolor_core::manifest::{Manifest, ManifestEntry};
use tricolor_core::pipeline::{process_observation, ObservationSink};
use tricolor_core::plane::ChannelPlane;

/// Sink capturing logical output names in emission order.
#[derive(Default)]
struct RecordingSink {
    composites: Vec<String>,
    diagnostics: Vec<String>,
    manifests: Vec<Manifest>,
}

impl ObservationSink for RecordingSink {
    fn write_composite(&mut self, name: &str, _image: &CompositeImage) -> Result<()> {
        self.composites.push(name.to_string());
        Ok(())
    }

    fn write_diagnostic(&mut self, name: &str, _plane: &ChannelPlane) -> Result<()> {
        self.diagnostics.push(name.to_string());
        Ok(())
    }

    fn persist_manifest(&mut self, manifest: &Manifest) -> Result<()> {
        self.manifests.push(manifest.clone());
        Ok(())
    }
}

/// Blue and red bright at (3,3), green bright at (4,3): one pixel of
/// blue-green misregistration.
fn misregistered_set() -> ChannelSet {
    ChannelSet::new(
        single_bright(8, 8, 3, 3),
        single_bright(8, 8, 4, 3),
        single_bright(8, 8, 3, 3),
    )
    .unwrap()
}

fn manifest(max_offset: u32) -> Manifest {
    Manifest {
        max_offset,
        files: vec![
            ManifestEntry {
                filename: "blue.png".into(),
                filter: Filter::Blue,
                offset_x: 0,
                offset_y: 0,
            },
            ManifestEntry {
                filename: "green.png".into(),
                filter: Filter::Green,
                offset_x: 0,
                offset_y: 0,
            },
            ManifestEntry {
                filename: "red.png".into(),
                filter: Filter::Red,
                offset_x: 0,
                offset_y: 0,
            },
        ],
    }
}

#[test]
fn test_widened_radius_aligns_and_persists() {
    let set = misregistered_set();
    let mut sink = RecordingSink::default();

    let report = process_observation(&set, &manifest(0), 2, &mut sink).unwrap();

    assert!(report.aligned);
    assert_eq!(report.state.max_radius, 2);
    assert_eq!(report.state.green, Offset::new(-1, 0));
    assert_eq!(report.state.red, Offset::ZERO);

    // Unaligned diagnostics first, then the post-search pair.
    assert_eq!(
        sink.diagnostics,
        vec![
            "v3_bg_align_0_0",
            "v3_br_align_0_0",
            "v3_bg_align_-1_0",
            "v3_br_align_0_0",
        ]
    );
    assert_eq!(sink.composites, vec!["v1_alpha", "v1_beta", "v2", "v3"]);

    assert_eq!(sink.manifests.len(), 1);
    let persisted = &sink.manifests[0];
    assert_eq!(persisted.max_offset, 2);
    assert_eq!(
        persisted.entry(Filter::Green).unwrap().offset(),
        Offset::new(-1, 0)
    );
}

#[test]
fn test_explored_radius_skips_search_but_still_composites() {
    let set = misregistered_set().with_offsets(Offset::new(-1, 0), Offset::ZERO);
    let mut sink = RecordingSink::default();

    let report = process_observation(&set, &manifest(2), 2, &mut sink).unwrap();

    assert!(!report.aligned);
    assert!(sink.diagnostics.is_empty());
    assert!(sink.manifests.is_empty());
    // A previous search round is on record, so the aligned blend still runs.
    assert_eq!(sink.composites, vec!["v1_alpha", "v1_beta", "v2", "v3"]);
}

#[test]
fn test_unaligned_observation_gets_no_aligned_blend() {
    let set = misregistered_set();
    let mut sink = RecordingSink::default();

    let report = process_observation(&set, &manifest(0), 0, &mut sink).unwrap();

    assert!(!report.aligned);
    assert!(sink.diagnostics.is_empty());
    assert!(sink.manifests.is_empty());
    assert_eq!(sink.composites, vec!["v1_alpha", "v1_beta", "v2"]);
}

fn write_observation(dir: &Path) {
    let planes: [(&str, ChannelPlane); 3] = [
        ("blue.png", single_bright(8, 8, 3, 3)),
        ("green.png", single_bright(8, 8, 4, 3)),
        ("red.png", single_bright(8, 8, 3, 3)),
    ];
    for (name, plane) in &planes {
        save_gray(plane, &dir.join(name)).unwrap();
    }
    manifest(0).save(&dir.join("config.json")).unwrap();
}

#[test]
fn test_end_to_end_observation_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_observation(dir.path());

    let loaded = Manifest::load(&dir.path().join("config.json")).unwrap();
    let set = load_channel_set(dir.path(), &loaded).unwrap();

    let mut sink = DirectorySink::new(dir.path());
    let report = process_observation(&set, &loaded, 2, &mut sink).unwrap();
    assert!(report.aligned);

    for name in [
        "output_v1_alpha.jpg",
        "output_v1_beta.jpg",
        "output_v2.jpg",
        "output_v3.jpg",
        "output_v3_bg_align_0_0.jpg",
        "output_v3_bg_align_-1_0.jpg",
        "output_v3_br_align_0_0.jpg",
    ] {
        assert!(dir.path().join(name).exists(), "missing {name}");
    }

    let persisted = Manifest::load(&dir.path().join("config.json")).unwrap();
    assert_eq!(persisted.max_offset, 2);
    assert_eq!(
        persisted.entry(Filter::Green).unwrap().offset(),
        Offset::new(-1, 0)
    );

    // A second run at the same radius is a no-op search-wise.
    let set = load_channel_set(dir.path(), &persisted).unwrap();
    let mut sink = DirectorySink::new(dir.path());
    let report = process_observation(&set, &persisted, 2, &mut sink).unwrap();
    assert!(!report.aligned);
    assert_eq!(report.state.green, Offset::new(-1, 0));
}

#[test]
fn test_missing_channel_file_fails_the_observation() {
    let dir = tempfile::tempdir().unwrap();
    write_observation(dir.path());
    std::fs::remove_file(dir.path().join("green.png")).unwrap();

    let loaded = Manifest::load(&dir.path().join("config.json")).unwrap();
    assert!(load_channel_set(dir.path(), &loaded).is_err());
}
