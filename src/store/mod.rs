//! Media store
//!
//! The store owns the loaded catalog and answers the questions the gallery
//! needs to populate its controls:
//!
//! - `all_items`: every item, in catalog order
//! - `distinct_types`: the `all` wildcard followed by each type in first-seen order
//! - `tag_counts`: per-tag occurrence counts in first-seen order
//! - `find_by_id`: lookup for the detail view
//!
//! Loading is explicit: a store starts in [`LoadState::Loading`] and moves to
//! [`LoadState::Loaded`] once a catalog has been accepted, even an empty one.
//!
//! # Examples
//!
//! ```
//! use media_gallery::media::MediaItem;
//! use media_gallery::store::{LoadState, MediaStore};
//!
//! let mut store = MediaStore::new();
//! assert_eq!(store.load_state(), LoadState::Loading);
//!
//! store.load(vec![MediaItem::new("a", "Poster", "image", "2017-04-01")]).unwrap();
//! assert!(store.is_loaded());
//! assert_eq!(store.tag_counts().len(), 0);
//! ```

pub mod catalog;
pub mod error;

pub use catalog::{CatalogFormat, parse_catalog};
pub use error::StoreError;

use crate::media::{MediaId, MediaItem, TypeSelection, WILDCARD_TYPE};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Whether the store has received its catalog yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
}

/// A tag and how many items carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// In-memory media catalog
#[derive(Debug, Clone, Default)]
pub struct MediaStore {
    items: Vec<MediaItem>,
    state: LoadState,
    source: Option<PathBuf>,
}

impl MediaStore {
    /// Create an empty store that has not loaded anything yet
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            state: LoadState::Loading,
            source: None,
        }
    }

    /// Create a loaded store from items
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the items fail validation (see [`MediaStore::load`]).
    pub fn from_items(items: Vec<MediaItem>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        store.load(items)?;
        Ok(store)
    }

    /// Read and load a catalog file, picking the format from its extension
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file is missing, has an unsupported
    /// extension, cannot be parsed, or contains invalid items.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }

        let format = CatalogFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let items = parse_catalog(&content, format)?;

        let mut store = Self::new();
        store.load(items)?;
        store.source = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            format = ?format,
            items = store.len(),
            "catalog loaded"
        );
        Ok(store)
    }

    /// Replace the store contents and mark it loaded
    ///
    /// On error the store is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if two items share an id, or
    /// `StoreError::ReservedType` if an item's type is the `all` wildcard.
    pub fn load(&mut self, items: Vec<MediaItem>) -> Result<(), StoreError> {
        validate(&items)?;
        self.items = items;
        self.state = LoadState::Loaded;
        Ok(())
    }

    #[must_use]
    pub const fn load_state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    /// Path the catalog was read from, if it came from a file
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Every item in catalog order
    #[must_use]
    pub fn all_items(&self) -> &[MediaItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn find_by_id(&self, id: &MediaId) -> Option<&MediaItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// The `all` wildcard followed by each distinct item type, first-seen order
    #[must_use]
    pub fn distinct_types(&self) -> Vec<TypeSelection> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut types = vec![TypeSelection::All];

        for item in &self.items {
            if seen.insert(item.media_type.as_str()) {
                types.push(TypeSelection::Only(item.media_type.clone()));
            }
        }
        types
    }

    /// Occurrence count per tag, in the order tags are first seen
    #[must_use]
    pub fn tag_counts(&self) -> Vec<TagCount> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<TagCount> = Vec::new();

        for tag in self.items.iter().flat_map(|item| &item.tags) {
            if let Some(&pos) = index.get(tag.as_str()) {
                counts[pos].count += 1;
            } else {
                index.insert(tag.as_str(), counts.len());
                counts.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                });
            }
        }
        counts
    }
}

fn validate(items: &[MediaItem]) -> Result<(), StoreError> {
    let mut ids: HashSet<&MediaId> = HashSet::with_capacity(items.len());
    for item in items {
        if item.media_type == WILDCARD_TYPE {
            return Err(StoreError::ReservedType(item.id.clone()));
        }
        if !ids.insert(&item.id) {
            return Err(StoreError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}
