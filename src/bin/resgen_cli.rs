//! resgen CLI
//!
//! Checks the source images, generates every derivative for the
//! selected platforms, and optionally prints the config.xml fragment.
//! Any failure prints `Error: <message>` and exits non-zero.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use resgen_core::{
    manifest, pipeline, validation, ConsoleReporter, GeneratorError, Reporter, RunSettings,
};

#[derive(Parser)]
#[command(name = "resgen-cli")]
#[command(version, about = "Generate mobile icon and splash screen resources")]
struct Cli {
    /// Source icon file (1024x1024)
    #[arg(short, long, default_value = "./resources/icon.png")]
    icon: PathBuf,

    /// Source splash screen file (2732x2732)
    #[arg(short, long, default_value = "./resources/splash.png")]
    splash: PathBuf,

    /// Comma separated platform list (default: all platforms)
    #[arg(short, long, value_delimiter = ',')]
    platforms: Option<Vec<String>>,

    /// Output directory
    #[arg(short, long, default_value = "./resources")]
    outputdir: PathBuf,

    /// Process icon files only
    #[arg(short = 'I', long)]
    icon_only: bool,

    /// Process splash files only
    #[arg(short = 'S', long)]
    splash_only: bool,

    /// Create the output directory if missing
    #[arg(short, long)]
    makedir: bool,

    /// Print the config.xml fragment after generation
    #[arg(short, long)]
    config: bool,
}

impl Cli {
    fn into_settings(self) -> RunSettings {
        // Neither exclusivity flag enables both kinds.
        let make_icons = self.icon_only || !self.splash_only;
        let make_splash = self.splash_only || !self.icon_only;

        RunSettings {
            icon_path: self.icon,
            splash_path: self.splash,
            platforms: self.platforms,
            output_dir: self.outputdir,
            make_icons,
            make_splash,
            make_dir: self.makedir,
            emit_manifest: self.config,
        }
    }
}

fn run(settings: &RunSettings, reporter: &dyn Reporter) -> Result<(), GeneratorError> {
    let context = validation::check(settings, reporter)?;
    pipeline::generate(&context, settings, reporter)?;

    if settings.emit_manifest {
        let stdout = io::stdout();
        manifest::print_manifest(&mut stdout.lock(), settings, &context.platforms)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    println!("***************************");
    println!("resgen-cli {}", resgen_core::VERSION);
    println!("***************************");

    let settings = cli.into_settings();
    match run(&settings, &ConsoleReporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
