//! Manifest printer.
//!
//! Emits the config.xml fragment for the selected platforms. The
//! listing is re-derived from the catalog and settings, not from the
//! pipeline's actual output; callers run it only after a fully
//! successful generation pass.

use std::io::Write;

use crate::catalog::{self, Transform};
use crate::error::GeneratorError;
use crate::settings::RunSettings;

/// Write `<platform>` blocks with one element per manifest-visible
/// definition of each enabled asset kind.
///
/// Android elements carry the density qualifier; every other platform
/// gets explicit width/height attributes. A selected platform with no
/// enabled groups still prints an empty block.
pub fn print_manifest<W: Write>(
    out: &mut W,
    settings: &RunSettings,
    platforms: &[&'static str],
) -> Result<(), GeneratorError> {
    for platform in platforms.iter().copied() {
        writeln!(out, "<platform name=\"{platform}\">")?;

        for group in catalog::lookup(platform)? {
            if !settings.kind_enabled(group.kind) {
                continue;
            }

            for definition in group.definitions {
                if !definition.in_manifest {
                    continue;
                }

                let src = settings
                    .output_dir
                    .join(group.subpath)
                    .join(definition.file_name);

                let attributes = if platform == "android" {
                    format!("density=\"{}\"", definition.density.unwrap_or_default())
                } else {
                    let (width, height) = match definition.transform {
                        Transform::Resize { size } => (size, size),
                        Transform::CenterCrop { width, height } => (width, height),
                    };
                    format!("width=\"{width}\" height=\"{height}\"")
                };

                writeln!(
                    out,
                    "<{tag} src=\"{src}\" {attributes} />",
                    tag = group.kind.label(),
                    src = src.display(),
                )?;
            }
        }

        writeln!(out, "</platform>")?;
    }

    Ok(())
}
