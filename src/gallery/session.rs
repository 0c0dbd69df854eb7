//! Gallery session state
//!
//! # Lifecycle
//!
//! ```text
//! Gallery opened  → GallerySession::new()   (default filters, modal hidden)
//! Search / type / tag events → filter mutators
//! Item clicked    → show_modal(id)
//! Modal closed    → hide_modal()
//! Gallery closed  → session dropped (never persisted)
//! ```

use crate::filters::{FilterState, select_visible};
use crate::media::{MediaId, MediaItem, TypeSelection};
use serde::{Deserialize, Serialize};

/// Detail modal visibility and the item it shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalState {
    pub visible: bool,
    pub active_media_id: Option<MediaId>,
}

/// State owned by an open gallery view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySession {
    #[serde(default)]
    pub filter: FilterState,
    #[serde(default)]
    pub modal: ModalState,
}

impl GallerySession {
    /// Start a session with default filters and the modal hidden
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a pre-built filter state
    #[must_use]
    pub fn with_filter(filter: FilterState) -> Self {
        Self {
            filter,
            modal: ModalState::default(),
        }
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_search_value(&mut self, value: impl Into<String>) {
        self.filter.set_search_value(value);
    }

    pub fn set_type_selection(&mut self, selection: impl Into<TypeSelection>) {
        self.filter.set_type_selection(selection);
    }

    pub fn add_tag_filter(&mut self, tag: impl Into<String>) -> bool {
        self.filter.add_tag_filter(tag)
    }

    pub fn remove_tag_filter(&mut self, tag: &str) -> bool {
        self.filter.remove_tag_filter(tag)
    }

    /// Apply a tag chip change: checked activates the tag, unchecked removes it
    pub fn set_tag_checked(&mut self, tag: &str, checked: bool) {
        if checked {
            self.filter.add_tag_filter(tag);
        } else {
            self.filter.remove_tag_filter(tag);
        }
    }

    #[must_use]
    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.filter.is_tag_active(tag)
    }

    /// Open the detail modal for an item
    pub fn show_modal(&mut self, id: impl Into<MediaId>) {
        self.modal.active_media_id = Some(id.into());
        self.modal.visible = true;
    }

    /// Close the detail modal
    ///
    /// The active id is kept so reopening the same item needs no lookup.
    pub fn hide_modal(&mut self) {
        self.modal.visible = false;
    }

    #[must_use]
    pub const fn is_modal_visible(&self) -> bool {
        self.modal.visible
    }

    /// The item shown in the detail modal
    ///
    /// `None` while the modal is hidden or when the active id is not in `items`.
    #[must_use]
    pub fn active_item<'a>(&self, items: &'a [MediaItem]) -> Option<&'a MediaItem> {
        if !self.modal.visible {
            return None;
        }
        let id = self.modal.active_media_id.as_ref()?;
        items.iter().find(|item| &item.id == id)
    }

    /// Visible items for the current filter state
    #[must_use]
    pub fn visible_items<'a>(&self, items: &'a [MediaItem]) -> Vec<&'a MediaItem> {
        select_visible(items, &self.filter)
    }
}
