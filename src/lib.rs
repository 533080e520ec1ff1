//! resgen-core - mobile resource generator
//!
//! Turns one 1024x1024 icon and one 2732x2732 splash screen into the
//! fixed catalog of per-platform derivatives (Android, iOS, Windows,
//! BlackBerry10) and optionally prints the matching config.xml
//! fragment.
//!
//! A run is three phases, each handed an explicit context:
//! 1. precondition checks ([`validation::check`])
//! 2. generation ([`pipeline::generate`])
//! 3. optional manifest ([`manifest::print_manifest`])

pub mod catalog;
pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod report;
pub mod settings;
pub mod validation;

pub use catalog::{AssetDefinition, AssetGroup, AssetKind, Transform};
pub use error::GeneratorError;
pub use manifest::print_manifest;
pub use pipeline::generate;
pub use report::{ConsoleReporter, Reporter};
pub use settings::RunSettings;
pub use validation::{check, RunContext, SourceImages};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
