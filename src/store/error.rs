//! Store-specific error types
//!
//! Errors raised while loading a media catalog. Filtering itself never fails;
//! everything here happens before the gallery sees the items.
//!
//! # Error Types
//!
//! - **`NotFound`**: The catalog path does not exist
//! - **`UnsupportedFormat`**: The file extension is not json, toml or csv
//! - **`Json` / `Toml` / `Csv`**: The catalog could not be parsed
//! - **`InvalidCatalog`**: Parsed, but not shaped like a catalog
//! - **`DuplicateId`** / **`ReservedType`**: Item-level validation failures

use crate::media::MediaId;
use std::path::PathBuf;
use thiserror::Error;

/// Media store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Catalog file does not exist
    #[error("Catalog not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Catalog extension is not recognized
    #[error("Unsupported catalog format '{0}' (expected json, toml or csv)")]
    UnsupportedFormat(String),

    /// JSON parse error
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error
    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSV parse error
    #[error("Invalid CSV catalog: {0}")]
    Csv(#[from] csv::Error),

    /// Document parsed but has the wrong shape
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Two items share an id
    #[error("Duplicate media id: {0}")]
    DuplicateId(MediaId),

    /// An item uses the reserved wildcard as its type
    #[error("Media item {0} uses the reserved type 'all'")]
    ReservedType(MediaId),

    /// I/O error while reading the catalog
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
