//! End-to-end generation tests against real temp directories.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use resgen_core::{
    catalog, pipeline, validation, GeneratorError, Reporter, RunSettings,
};

struct Silent;

impl Reporter for Silent {
    fn header(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn error(&self, _: &str) {}
    fn progress(&self, _: &str, _: usize, _: usize, _: &str) {}
}

/// Collects progress events so tests can assert on ordering and counts.
#[derive(Default)]
struct Recording {
    progress: RefCell<Vec<(String, usize, usize)>>,
}

impl Reporter for Recording {
    fn header(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn error(&self, _: &str) {}
    fn progress(&self, section: &str, index: usize, total: usize, _: &str) {
        self.progress
            .borrow_mut()
            .push((section.to_string(), index, total));
    }
}

fn write_gradient_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    img.save(path).unwrap();
}

fn write_solid_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([40, 90, 200, 255]))
        .save(path)
        .unwrap();
}

struct Fixture {
    _dir: TempDir,
    settings: RunSettings,
}

fn fixture(platforms: Option<Vec<&str>>, icons: bool, splash: bool) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let icon_path = dir.path().join("icon.png");
    let splash_path = dir.path().join("splash.png");
    let output_dir = dir.path().join("out");
    fs::create_dir(&output_dir).unwrap();

    if icons {
        write_gradient_png(&icon_path, 1024, 1024);
    }
    if splash {
        write_solid_png(&splash_path, 2732, 2732);
    }

    let settings = RunSettings {
        icon_path,
        splash_path,
        platforms: platforms.map(|p| p.iter().map(|s| s.to_string()).collect()),
        output_dir,
        make_icons: icons,
        make_splash: splash,
        make_dir: false,
        emit_manifest: false,
    };

    Fixture { _dir: dir, settings }
}

fn listed_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        return vec![];
    }
    let mut files: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    files.sort();
    files
}

#[test]
fn valid_sources_pass_checks() {
    let fx = fixture(None, true, true);
    let context = validation::check(&fx.settings, &Silent).unwrap();
    assert_eq!(context.platforms, catalog::platform_names());
    assert!(context.images.icon.is_some());
    assert!(context.images.splash.is_some());
}

#[test]
fn wrong_icon_dimensions_report_actual_size() {
    let fx = fixture(None, true, false);
    write_gradient_png(&fx.settings.icon_path, 1023, 1024);

    let err = validation::load_source_images(&fx.settings, &Silent).unwrap_err();
    match err {
        GeneratorError::SourceImageWrongDimensions {
            width,
            height,
            expected,
            ..
        } => {
            assert_eq!((width, height), (1023, 1024));
            assert_eq!(expected, 1024);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn undersized_square_icon_rejected() {
    let fx = fixture(None, true, false);
    write_gradient_png(&fx.settings.icon_path, 512, 512);

    let err = validation::load_source_images(&fx.settings, &Silent).unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::SourceImageWrongDimensions { .. }
    ));
}

#[test]
fn wrong_splash_dimensions_rejected() {
    let fx = fixture(None, false, true);
    write_solid_png(&fx.settings.splash_path, 2048, 2732);

    let err = validation::load_source_images(&fx.settings, &Silent).unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::SourceImageWrongDimensions { .. }
    ));
}

#[test]
fn undecodable_source_is_unreadable() {
    let fx = fixture(None, true, false);
    fs::write(&fx.settings.icon_path, b"not a png").unwrap();

    let err = validation::load_source_images(&fx.settings, &Silent).unwrap_err();
    assert!(matches!(err, GeneratorError::SourceImageUnreadable { .. }));
}

#[test]
fn unknown_platform_fails_closed_with_no_files() {
    let fx = fixture(Some(vec!["android", "symbian"]), true, true);

    let err = validation::check(&fx.settings, &Silent).unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidPlatformList(_)));
    assert!(listed_files(&fx.settings.output_dir).is_empty());
}

#[test]
fn android_icons_only_writes_exactly_that_set() {
    let fx = fixture(Some(vec!["android"]), true, false);
    let context = validation::check(&fx.settings, &Silent).unwrap();
    pipeline::generate(&context, &fx.settings, &Silent).unwrap();

    let icon_dir = fx.settings.output_dir.join("android/icon");
    let expected: Vec<_> = catalog::lookup("android").unwrap()[0]
        .definitions
        .iter()
        .map(|d| d.file_name)
        .collect();
    let written = listed_files(&icon_dir);
    assert_eq!(written.len(), expected.len());
    for name in expected {
        assert!(icon_dir.join(name).is_file(), "{name} missing");
    }

    assert!(!fx.settings.output_dir.join("android/splash").exists());
    assert!(!fx.settings.output_dir.join("ios").exists());
    assert!(!fx.settings.output_dir.join("windows").exists());
    assert!(!fx.settings.output_dir.join("blackberry10").exists());
}

#[test]
fn generated_outputs_match_definition_dimensions() {
    let fx = fixture(Some(vec!["android"]), true, true);
    let context = validation::check(&fx.settings, &Silent).unwrap();
    pipeline::generate(&context, &fx.settings, &Silent).unwrap();

    let icon = image::open(
        fx.settings
            .output_dir
            .join("android/icon/drawable-xxxhdpi-icon.png"),
    )
    .unwrap();
    assert_eq!((icon.width(), icon.height()), (192, 192));

    let splash = image::open(
        fx.settings
            .output_dir
            .join("android/splash/drawable-land-ldpi-screen.png"),
    )
    .unwrap();
    assert_eq!((splash.width(), splash.height()), (320, 200));
}

#[test]
fn manifest_hidden_definitions_are_still_generated() {
    let fx = fixture(Some(vec!["ios"]), true, false);
    let context = validation::check(&fx.settings, &Silent).unwrap();
    pipeline::generate(&context, &fx.settings, &Silent).unwrap();

    assert!(fx
        .settings
        .output_dir
        .join("ios/icon/icon-1024.png")
        .is_file());
}

#[test]
fn progress_reported_once_per_definition_before_completion() {
    let fx = fixture(Some(vec!["blackberry10"]), true, false);
    let context = validation::check(&fx.settings, &Silent).unwrap();

    let recorder = Recording::default();
    pipeline::generate(&context, &fx.settings, &recorder).unwrap();

    let events = recorder.progress.into_inner();
    let total = catalog::lookup("blackberry10").unwrap()[0].definitions.len();
    assert_eq!(events.len(), total);
    for (i, (section, index, reported_total)) in events.iter().enumerate() {
        assert_eq!(section, "Generating icon files for blackberry10");
        assert_eq!(*index, i + 1);
        assert_eq!(*reported_total, total);
    }
}

#[test]
fn failed_definition_write_aborts_mid_group() {
    let fx = fixture(Some(vec!["android", "ios"]), true, false);
    // A directory squatting on the second definition's output path
    // makes its save fail after the first definition succeeded.
    let icon_dir = fx.settings.output_dir.join("android/icon");
    fs::create_dir_all(icon_dir.join("drawable-mdpi-icon.png")).unwrap();

    let context = validation::check(&fx.settings, &Silent).unwrap();
    let err = pipeline::generate(&context, &fx.settings, &Silent).unwrap_err();

    match err {
        GeneratorError::GenerationFailed {
            platform,
            file_name,
            ..
        } => {
            assert_eq!(platform, "android");
            assert_eq!(file_name, "drawable-mdpi-icon.png");
        }
        other => panic!("unexpected error: {other}"),
    }

    // The definition before the failure was written; nothing after it was.
    assert!(icon_dir.join("drawable-ldpi-icon.png").is_file());
    assert!(!icon_dir.join("drawable-hdpi-icon.png").exists());
    assert!(!fx.settings.output_dir.join("ios").exists());
}

#[test]
fn blocked_group_directory_aborts_before_later_platforms() {
    let fx = fixture(Some(vec!["android", "ios"]), true, false);
    // A plain file where the android subtree should go makes
    // create_dir_all fail on the first group.
    fs::write(fx.settings.output_dir.join("android"), b"in the way").unwrap();

    let context = validation::check(&fx.settings, &Silent).unwrap();
    let err = pipeline::generate(&context, &fx.settings, &Silent).unwrap_err();

    assert!(matches!(err, GeneratorError::OutputDirCreateFailed { .. }));
    assert!(!fx.settings.output_dir.join("ios").exists());
}

#[test]
fn repeated_runs_produce_identical_bytes() {
    let fx = fixture(Some(vec!["android"]), true, false);
    let context = validation::check(&fx.settings, &Silent).unwrap();

    pipeline::generate(&context, &fx.settings, &Silent).unwrap();
    let sample = fx
        .settings
        .output_dir
        .join("android/icon/drawable-mdpi-icon.png");
    let first = fs::read(&sample).unwrap();

    fs::remove_dir_all(fx.settings.output_dir.join("android")).unwrap();
    pipeline::generate(&context, &fx.settings, &Silent).unwrap();
    let second = fs::read(&sample).unwrap();

    assert_eq!(first, second);
}
