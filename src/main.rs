//! media-gallery CLI application entry point
//!
//! Loads a media catalog and prints the gallery views: the filtered item list,
//! tag counts, type options, and single-item details.
//!
//! # Usage
//!
//! ```bash
//! # All items, oldest first (default command)
//! media-gallery -c media.json
//!
//! # Search, type and tag filters
//! media-gallery -c media.json list -s facebook
//! media-gallery -c media.json list -T video -t policy -t march
//!
//! # Filter controls
//! media-gallery -c media.json tags
//! media-gallery -c media.json types
//!
//! # Detail view
//! media-gallery -c media.json show 3
//!
//! # Remember the catalog
//! media-gallery config set catalog=/path/to/media.json
//! ```
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`. `RUST_LOG` takes precedence over
//! the `-v` flags.

use media_gallery::{
    GalleryError,
    cli::{Cli, Commands},
    commands,
    config::GalleryConfig,
    output,
    store::MediaStore,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, GalleryError>;

fn init_logging(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Pick the catalog path: `--catalog` first, then the configured default
fn resolve_catalog(cli: &Cli, config: &GalleryConfig) -> Result<PathBuf> {
    cli.catalog
        .clone()
        .or_else(|| config.catalog.clone())
        .ok_or(GalleryError::NoCatalog)
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = GalleryConfig::config_path();
    let config = match &config_path {
        Ok(path) => GalleryConfig::load_or_default(path),
        Err(e) => {
            tracing::warn!(error = %e, "no config directory, using default configuration");
            GalleryConfig::default()
        }
    };
    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.needs_catalog() {
        match &command {
            Commands::Config { command } => {
                let config_path = config_path?;
                commands::config(command, &config_path, &mut out, quiet)?;
            }
            Commands::Completions { shell } => commands::completions(*shell, &mut out)?,
            _ => {}
        }
        return Ok(());
    }

    let catalog = resolve_catalog(cli, &config)?;
    let store = MediaStore::open(&catalog)?;

    match &command {
        Commands::List(args) => commands::list(&store, args, &mut out, quiet)?,
        Commands::Tags => commands::tags(&store, &mut out, quiet)?,
        Commands::Types => commands::types(&store, &mut out, quiet)?,
        Commands::Show(args) => commands::show(&store, args, &config.placeholder_image, &mut out)?,
        Commands::Config { .. } | Commands::Completions { .. } => {}
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.log_level());
    tracing::debug!(?cli, "starting media-gallery");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
