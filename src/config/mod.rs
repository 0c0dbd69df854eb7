//! Configuration module for media-gallery
//!
//! Manages the default catalog location and display preferences.
//! Configuration is stored in the user's config directory
//! (`~/.config/media-gallery/config.toml` on Linux) and can be overridden with
//! `MEDIA_GALLERY_*` environment variables.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::detail::DEFAULT_PLACEHOLDER_IMAGE;

/// Environment variable prefix (`MEDIA_GALLERY_CATALOG`, `MEDIA_GALLERY_QUIET`, ...)
pub const ENV_PREFIX: &str = "MEDIA_GALLERY";

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: &[&str] = &["catalog", "quiet", "placeholder_image"];

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Catalog file used when `--catalog` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Image shown in the detail view for items without one
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            quiet: false,
            placeholder_image: default_placeholder_image(),
        }
    }
}

impl GalleryConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("media-gallery").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields defaults; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or environment values cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, layered with environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or environment values cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// Like [`load_from`](Self::load_from), but an unreadable file or bad override
    /// logs a warning and yields defaults
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, path = %path.display(), "invalid configuration, using defaults");
            Self::default()
        })
    }

    /// Load only the settings stored in the file, ignoring environment overrides
    ///
    /// Use this before `save_to` so overrides are never persisted.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .build()?
            .try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Read a single setting as a display string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "catalog" => Ok(self
                .catalog
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "quiet" => Ok(self.quiet.to_string()),
            "placeholder_image" => Ok(self.placeholder_image.clone()),
            _ => Err(ConfigError::NotFound(key.to_string())),
        }
    }

    /// Update a single setting in memory
    ///
    /// An empty value for `catalog` clears it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys or values of the wrong type.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "catalog" => {
                self.catalog = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "quiet" => {
                self.quiet = value.parse().map_err(|_| {
                    ConfigError::Message(format!("Invalid value for quiet: '{value}' (expected true or false)"))
                })?;
            }
            "placeholder_image" => {
                if value.is_empty() {
                    return Err(ConfigError::Message("placeholder_image cannot be empty".to_string()));
                }
                self.placeholder_image = value.to_string();
            }
            _ => return Err(ConfigError::NotFound(key.to_string())),
        }
        Ok(())
    }
}

/// Split a `KEY=VALUE` setting
///
/// # Errors
///
/// Returns `ConfigError::Message` when the `=` is missing or the key is empty.
pub fn parse_setting(setting: &str) -> Result<(&str, &str), ConfigError> {
    let (key, value) = setting
        .split_once('=')
        .ok_or_else(|| ConfigError::Message(format!("Expected KEY=VALUE, got '{setting}'")))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::Message("Setting key cannot be empty".to_string()));
    }
    Ok((key, value.trim()))
}
