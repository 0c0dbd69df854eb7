//! Config command - read and update configuration values

use crate::{
    GalleryError,
    cli::ConfigCommands,
    config::{GalleryConfig, parse_setting},
};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

type Result<T> = std::result::Result<T, GalleryError>;

/// Execute a config subcommand against the config file at `config_path`
///
/// # Errors
/// Returns an error for unknown keys, invalid values, or if the config file
/// cannot be read or written.
pub fn execute<W: Write>(
    command: &ConfigCommands,
    config_path: &Path,
    out: &mut W,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Get { key } => {
            let config = GalleryConfig::load_from(config_path)?;
            writeln!(out, "{}", config.get_value(key)?)?;
        }
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting)?;
            let mut config = GalleryConfig::load_file(config_path).unwrap_or_else(|e| {
                tracing::warn!(error = %e, path = %config_path.display(), "unreadable config file, starting from defaults");
                GalleryConfig::default()
            });
            config.set_value(key, value)?;
            config.save_to(config_path)?;
            tracing::info!(key, value, path = %config_path.display(), "configuration updated");
            if !quiet {
                writeln!(out, "{} Set {key} = {value}", "✓".green())?;
            }
        }
    }
    Ok(())
}
