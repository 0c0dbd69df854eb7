//! media-gallery - Filter and inspect a tagged media catalog
//!
//! This library provides the filtering core of a media gallery: a catalog of
//! media items is loaded into a [`store::MediaStore`], and
//! [`filters::select_visible`] computes which items a given
//! [`filters::FilterState`] shows and in what order.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod detail;
pub mod filters;
pub mod gallery;
pub mod media;
pub mod output;
pub mod store;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Catalog loading error
    #[error("Store error: {0}")]
    StoreError(#[from] store::StoreError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Output serialization error
    #[error("Serialization error: {0}")]
    SerializeError(String),
    /// No catalog given on the command line or in the configuration
    #[error("No catalog configured; pass --catalog or run `media-gallery config set catalog=PATH`")]
    NoCatalog,
    /// Requested item does not exist
    #[error("Media item not found: {0}")]
    ItemNotFound(media::MediaId),
}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializeError(err.to_string())
    }
}

impl From<csv::Error> for GalleryError {
    fn from(err: csv::Error) -> Self {
        Self::SerializeError(err.to_string())
    }
}
