//! Run settings, built once from CLI input and never mutated.

use std::path::PathBuf;

use crate::catalog::AssetKind;

#[derive(Debug, Clone)]
pub struct RunSettings {
    pub icon_path: PathBuf,
    pub splash_path: PathBuf,
    /// `None` selects every catalog platform.
    pub platforms: Option<Vec<String>>,
    pub output_dir: PathBuf,
    pub make_icons: bool,
    pub make_splash: bool,
    /// Create the output directory when it does not exist.
    pub make_dir: bool,
    /// Print the config.xml fragment after generation.
    pub emit_manifest: bool,
}

impl RunSettings {
    /// Whether definitions of `kind` are generated this run.
    pub fn kind_enabled(&self, kind: AssetKind) -> bool {
        match kind {
            AssetKind::Icon => self.make_icons,
            AssetKind::Splash => self.make_splash,
        }
    }
}
