//! Binary entrypoint for the picture viewer.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use picture_viewer::AppController;
use picture_viewer::config::Configuration;
use picture_viewer::scan::ScanOptions;
use picture_viewer::shell::Shell;

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "picture-viewer", about = "Browse the pictures of a folder")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Folder to open at startup (overrides photo-library-path)
    #[arg(value_name = "FOLDER")]
    folder: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("picture_viewer={level}").parse()?);
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut cfg = Configuration::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?
        .validated()
        .context("validating configuration")?;
    if let Some(folder) = cli.folder {
        cfg.photo_library_path = folder;
    }

    let scan = ScanOptions::from(&cfg);
    let mut controller = AppController::new();
    if let Some(folder) = cfg.startup_folder() {
        match controller.open_folder(folder, &scan) {
            Ok(first) => info!(first = ?first, "startup folder opened"),
            Err(err) => warn!(error = %err, "could not open startup folder"),
        }
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), controller, scan).with_exif(cfg.read_exif);
    shell.run()
}
