//! Screenshot generator integration tests

use competitor_lens_common::layout::{CANVAS_HEIGHT, CANVAS_WIDTH};
use competitor_lens_common::{ScreenshotSpec, SCREENSHOTS};
use competitor_lens_prep::screenshots::{self, Typeface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;
use std::path::Path;
use tempfile::tempdir;

fn file_names(dir: &Path) -> BTreeSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect()
}

/// One PNG per entry plus README.md
#[test]
fn test_generates_one_png_per_spec_plus_manifest() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("uploads").join("screenshots");
    let mut rng = StdRng::seed_from_u64(3);

    let summary = screenshots::generate_all(&output, &SCREENSHOTS, &Typeface::Builtin, &mut rng)
        .expect("generation failed");

    assert_eq!(summary.files.len(), 13);
    assert_eq!(summary.manifest, output.join("README.md"));

    let names = file_names(&output);
    assert_eq!(names.len(), 14);
    assert_eq!(names.iter().filter(|n| n.ends_with(".png")).count(), 13);
    for spec in &SCREENSHOTS {
        assert!(names.contains(&spec.file_name()), "missing {}", spec.file_name());
    }
}

/// Every image has the canvas size
#[test]
fn test_images_have_canvas_size() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut rng = StdRng::seed_from_u64(5);

    let summary = screenshots::generate_all(dir.path(), &SCREENSHOTS, &Typeface::Builtin, &mut rng).unwrap();

    for file in &summary.files {
        let img = image::open(file).expect("png should decode");
        assert_eq!((img.width(), img.height()), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }
}

/// A second run overwrites the same set of files
#[test]
fn test_rerun_overwrites_same_file_set() {
    let dir = tempdir().expect("Failed to create temp dir");

    screenshots::generate_all(dir.path(), &SCREENSHOTS, &Typeface::Builtin, &mut StdRng::seed_from_u64(1)).unwrap();
    let first = file_names(dir.path());

    screenshots::generate_all(dir.path(), &SCREENSHOTS, &Typeface::Builtin, &mut StdRng::seed_from_u64(2)).unwrap();
    let second = file_names(dir.path());

    assert_eq!(first, second);
}

/// Unknown exchanges get the default gray background
#[test]
fn test_unknown_exchange_renders_default_background() {
    let dir = tempdir().expect("Failed to create temp dir");
    let specs = [ScreenshotSpec::new("bitstamp", "spot", "Bitstamp Spot Trading")];

    let summary = screenshots::generate_all(dir.path(), &specs, &Typeface::Builtin, &mut StdRng::seed_from_u64(9)).unwrap();

    let img = image::open(&summary.files[0]).unwrap().to_rgb8();
    assert_eq!(img.get_pixel(10, 600).0, [0xCC, 0xCC, 0xCC]);

    let manifest = std::fs::read_to_string(&summary.manifest).unwrap();
    assert!(manifest.contains("- **bitstamp-spot.png**: Bitstamp Spot Trading"));
}

/// A missing font falls back to the built-in font
#[test]
fn test_missing_font_falls_back() {
    let typeface = Typeface::load(&[Path::new("/nonexistent/Arial.ttf").to_path_buf()]);
    assert!(typeface.is_builtin());

    let dir = tempdir().expect("Failed to create temp dir");
    let specs = [SCREENSHOTS[4]];
    let summary = screenshots::generate_all(dir.path(), &specs, &typeface, &mut StdRng::seed_from_u64(0));
    assert!(summary.is_ok());
}
