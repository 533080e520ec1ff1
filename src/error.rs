//! Error taxonomy for a generator run. Every variant is fatal; nothing
//! is retried and already-written files are never rolled back.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Catalog lookup for a platform that is not registered.
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// Requested platform list contained names outside the catalog.
    /// Carries every unknown entry; nothing is processed.
    #[error("Bad platforms: {}", .0.join(","))]
    InvalidPlatformList(Vec<String>),

    /// A source image file could not be read or decoded.
    #[error("Could not load {kind} file {path}: {message}")]
    SourceImageUnreadable {
        kind: &'static str,
        path: PathBuf,
        message: String,
    },

    /// A source image decoded fine but is not the required square size.
    #[error("Bad {kind} file ({width}x{height}), expected {expected}x{expected}")]
    SourceImageWrongDimensions {
        kind: &'static str,
        width: u32,
        height: u32,
        expected: u32,
    },

    /// Output directory absent and directory creation was not requested.
    #[error("Output directory not found: {0}")]
    OutputDirMissing(PathBuf),

    /// Output directory (or a platform subdirectory) could not be created.
    #[error("Output directory could not be created: {path}: {source}")]
    OutputDirCreateFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// I/O failure outside the image write path (manifest output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transform or write failure for one definition. Aborts the run.
    #[error("Failed to generate {file_name} for {platform}: {message}")]
    GenerationFailed {
        platform: &'static str,
        file_name: &'static str,
        message: String,
    },
}
