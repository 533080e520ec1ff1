//! Generation pipeline.
//!
//! Walks platform -> asset group -> definition in catalog order,
//! transforming one copy of the base image per definition and writing
//! it out. Strictly sequential: definition N+1 does not start until
//! N's write has resolved. Fail-fast with no cleanup of files already
//! written.

use std::fs;
use std::path::Path;

use image::imageops::FilterType;
use image::DynamicImage;
use log::debug;

use crate::catalog::{self, AssetGroup, AssetKind, Transform};
use crate::error::GeneratorError;
use crate::report::Reporter;
use crate::settings::RunSettings;
use crate::validation::{RunContext, SourceImages};

/// Generate every enabled asset group for the selected platforms.
pub fn generate(
    context: &RunContext,
    settings: &RunSettings,
    reporter: &dyn Reporter,
) -> Result<(), GeneratorError> {
    reporter.header("Generating files");

    for group in selected_groups(&context.platforms, settings)? {
        generate_group(group, &context.images, settings, reporter)?;
    }

    Ok(())
}

/// Asset groups for the selected platforms, filtered to the enabled
/// asset kinds, in catalog order.
fn selected_groups(
    platforms: &[&'static str],
    settings: &RunSettings,
) -> Result<Vec<&'static AssetGroup>, GeneratorError> {
    let mut groups = Vec::new();
    for platform in platforms.iter().copied() {
        for group in catalog::lookup(platform)? {
            if settings.kind_enabled(group.kind) {
                groups.push(*group);
            }
        }
    }
    Ok(groups)
}

fn generate_group(
    group: &AssetGroup,
    images: &SourceImages,
    settings: &RunSettings,
    reporter: &dyn Reporter,
) -> Result<(), GeneratorError> {
    let group_dir = settings.output_dir.join(group.subpath);
    fs::create_dir_all(&group_dir).map_err(|source| GeneratorError::OutputDirCreateFailed {
        path: group_dir.clone(),
        source,
    })?;

    let section = format!(
        "Generating {} files for {}",
        group.kind.label(),
        group.platform
    );
    let total = group.definitions.len();

    for (index, definition) in group.definitions.iter().enumerate() {
        reporter.progress(&section, index + 1, total, definition.file_name);

        let source = source_for(group, images)?;
        let output_path = group_dir.join(definition.file_name);
        debug!(
            "transforming {} -> {}",
            group.platform,
            output_path.display()
        );

        // resize_exact and crop_imm read from the shared source and
        // return an independent image, so the source stays pristine
        // across definitions.
        let derived = match definition.transform {
            Transform::Resize { size } => {
                source.resize_exact(size, size, FilterType::Lanczos3)
            }
            Transform::CenterCrop { width, height } => {
                let x = (source.width() - width) / 2;
                let y = (source.height() - height) / 2;
                source.crop_imm(x, y, width, height)
            }
        };

        write_output(&derived, &output_path, group, definition.file_name)?;
    }

    reporter.success(&format!(
        "Generated {} files for {}",
        group.kind.label(),
        group.platform
    ));
    Ok(())
}

fn source_for<'a>(
    group: &AssetGroup,
    images: &'a SourceImages,
) -> Result<&'a DynamicImage, GeneratorError> {
    let source = match group.kind {
        AssetKind::Icon => images.icon.as_ref(),
        AssetKind::Splash => images.splash.as_ref(),
    };
    source.ok_or_else(|| GeneratorError::GenerationFailed {
        platform: group.platform,
        file_name: group.subpath,
        message: format!("{} source image not loaded", group.kind.label()),
    })
}

fn write_output(
    image: &DynamicImage,
    path: &Path,
    group: &AssetGroup,
    file_name: &'static str,
) -> Result<(), GeneratorError> {
    image.save(path).map_err(|err| GeneratorError::GenerationFailed {
        platform: group.platform,
        file_name,
        message: err.to_string(),
    })
}
