//! Filter state
//!
//! `FilterState` is the explicit, serializable state behind the gallery's
//! search box, type picker and tag toggles. It is created with defaults when a
//! gallery session opens and dropped when it closes.

use crate::media::TypeSelection;
use serde::{Deserialize, Serialize};

/// Current search, type and tag selection
///
/// Defaults to "no filtering": empty search, `all` types, no active tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Free-text search; empty means "no filter"
    #[serde(default)]
    pub search_value: String,

    #[serde(default)]
    pub type_selection: TypeSelection,

    /// Active tags in activation order, without duplicates
    #[serde(default)]
    pub tag_filters: Vec<String>,
}

impl FilterState {
    /// Create a state that lets every item through
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, value: impl Into<String>) -> Self {
        self.set_search_value(value);
        self
    }

    #[must_use]
    pub fn with_type(mut self, selection: impl Into<TypeSelection>) -> Self {
        self.set_type_selection(selection);
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.add_tag_filter(tag);
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self.add_tag_filter(tag);
        }
        self
    }

    pub fn set_search_value(&mut self, value: impl Into<String>) {
        self.search_value = value.into();
    }

    pub fn set_type_selection(&mut self, selection: impl Into<TypeSelection>) {
        self.type_selection = selection.into();
    }

    /// Activate a tag
    ///
    /// Returns false if the tag was already active.
    pub fn add_tag_filter(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.tag_filters.contains(&tag) {
            return false;
        }
        self.tag_filters.push(tag);
        true
    }

    /// Deactivate a tag
    ///
    /// Returns false if the tag was not active.
    pub fn remove_tag_filter(&mut self, tag: &str) -> bool {
        let before = self.tag_filters.len();
        self.tag_filters.retain(|t| t != tag);
        self.tag_filters.len() != before
    }

    /// Toggle a tag the way a checkable tag chip does
    ///
    /// Returns true if the tag is active afterwards.
    pub fn toggle_tag_filter(&mut self, tag: &str) -> bool {
        if self.remove_tag_filter(tag) {
            false
        } else {
            self.add_tag_filter(tag)
        }
    }

    #[must_use]
    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.tag_filters.iter().any(|t| t == tag)
    }

    /// True when no category restricts the result
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search_value.is_empty() && self.type_selection.is_all() && self.tag_filters.is_empty()
    }

    /// Reset to defaults
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
