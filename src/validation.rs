//! Precondition checks.
//!
//! All three checks must pass, in order, before any file is written:
//! platform resolution, source image loading, output directory. Each
//! failure aborts the whole run.

use std::fs;
use std::path::Path;

use image::DynamicImage;
use log::debug;

use crate::catalog::{self, ICON_SOURCE_SIZE, SPLASH_SOURCE_SIZE};
use crate::error::GeneratorError;
use crate::report::Reporter;
use crate::settings::RunSettings;

/// Decoded source images for the run. Read-only once loaded; the
/// pipeline works on copies.
#[derive(Debug, Default)]
pub struct SourceImages {
    pub icon: Option<DynamicImage>,
    pub splash: Option<DynamicImage>,
}

/// Everything the generation and manifest phases need, assembled by
/// [`check`]. Threaded explicitly instead of held in process globals.
#[derive(Debug)]
pub struct RunContext {
    pub platforms: Vec<&'static str>,
    pub images: SourceImages,
}

/// Run every precondition check and assemble the run context.
pub fn check(
    settings: &RunSettings,
    reporter: &dyn Reporter,
) -> Result<RunContext, GeneratorError> {
    reporter.header("Checking files and directories");

    let platforms = resolve_platforms(settings, reporter)?;
    let images = load_source_images(settings, reporter)?;
    ensure_output_dir(settings, reporter)?;

    Ok(RunContext { platforms, images })
}

/// Resolve the requested platform list against the catalog.
///
/// An absent or empty request selects every catalog platform. Any
/// unknown name fails the whole list; no platform is processed.
pub fn resolve_platforms(
    settings: &RunSettings,
    reporter: &dyn Reporter,
) -> Result<Vec<&'static str>, GeneratorError> {
    let registered = catalog::platform_names();

    let requested = match &settings.platforms {
        Some(list) if !list.is_empty() => list,
        _ => {
            reporter.success("Processing files for all platforms");
            return Ok(registered.to_vec());
        }
    };

    let mut selected = Vec::new();
    let mut unknown = Vec::new();
    for name in requested {
        match registered.iter().copied().find(|p| *p == name.as_str()) {
            Some(known) => selected.push(known),
            None => unknown.push(name.clone()),
        }
    }

    if !unknown.is_empty() {
        reporter.error(&format!("Bad platforms: {}", unknown.join(",")));
        return Err(GeneratorError::InvalidPlatformList(unknown));
    }

    reporter.success(&format!("Processing files for: {}", selected.join(",")));
    Ok(selected)
}

/// Load whichever source images the run needs. Icon and splash loads
/// are independent; either failure fails the run.
pub fn load_source_images(
    settings: &RunSettings,
    reporter: &dyn Reporter,
) -> Result<SourceImages, GeneratorError> {
    let mut images = SourceImages::default();

    if settings.make_icons {
        images.icon = Some(load_checked(
            "icon",
            &settings.icon_path,
            ICON_SOURCE_SIZE,
            reporter,
        )?);
    }
    if settings.make_splash {
        images.splash = Some(load_checked(
            "splash",
            &settings.splash_path,
            SPLASH_SOURCE_SIZE,
            reporter,
        )?);
    }

    Ok(images)
}

fn load_checked(
    kind: &'static str,
    path: &Path,
    expected: u32,
    reporter: &dyn Reporter,
) -> Result<DynamicImage, GeneratorError> {
    debug!("loading {} source from {}", kind, path.display());

    let image = image::open(path).map_err(|err| {
        reporter.error(&format!("Could not load {kind} file"));
        GeneratorError::SourceImageUnreadable {
            kind,
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    let (width, height) = (image.width(), image.height());
    if width == expected && width == height {
        reporter.success(&format!("{kind} file ok ({width}x{height})"));
        Ok(image)
    } else {
        reporter.error(&format!("Bad {kind} file ({width}x{height})"));
        Err(GeneratorError::SourceImageWrongDimensions {
            kind,
            width,
            height,
            expected,
        })
    }
}

/// Check the output directory, creating it (recursively) when asked.
pub fn ensure_output_dir(
    settings: &RunSettings,
    reporter: &dyn Reporter,
) -> Result<(), GeneratorError> {
    let dir = &settings.output_dir;

    if dir.exists() {
        reporter.success(&format!("Output directory ok ({})", dir.display()));
        return Ok(());
    }

    if !settings.make_dir {
        reporter.error(&format!("Output directory not found ({})", dir.display()));
        return Err(GeneratorError::OutputDirMissing(dir.clone()));
    }

    reporter.header(&format!("Creating directory ({})", dir.display()));
    fs::create_dir_all(dir).map_err(|source| GeneratorError::OutputDirCreateFailed {
        path: dir.clone(),
        source,
    })?;
    reporter.success("Directory created successfully");
    Ok(())
}
