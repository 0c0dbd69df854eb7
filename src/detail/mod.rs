//! Item detail view
//!
//! `ItemDetail` is everything the detail modal shows for one media item, with
//! the optional-field fallbacks already applied: placeholder image when the
//! item has none, no link when the link is absent, and notes split into
//! bullet lines.

use crate::media::{MediaId, MediaItem, format_accessed_date};
use serde::Serialize;

/// Image shown when an item has none of its own
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "assets/placeholder.png";

/// Number of leading characters stripped from each note line (`"- "`)
const NOTE_BULLET_WIDTH: usize = 2;

/// Detail modal contents for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    pub id: MediaId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// `Accessed Mon May 01 2017`
    pub accessed: String,
    pub image: String,
    pub tags: Vec<String>,
    pub description: String,
    pub note_lines: Vec<String>,
}

impl ItemDetail {
    /// Build the detail view for `item`
    #[must_use]
    pub fn from_item(item: &MediaItem, placeholder_image: &str) -> Self {
        let accessed = item.accessed_at().map_or_else(
            || "Accessed unknown date".to_string(),
            |at| format!("Accessed {}", format_accessed_date(&at)),
        );

        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            link: item.link_url().map(String::from),
            accessed,
            image: item.image_url().unwrap_or(placeholder_image).to_string(),
            tags: item.tags.clone(),
            description: item.description.clone(),
            note_lines: item.notes_text().map(note_lines).unwrap_or_default(),
        }
    }

    /// True when the image is the placeholder rather than the item's own
    #[must_use]
    pub fn uses_placeholder(&self, placeholder_image: &str) -> bool {
        self.image == placeholder_image
    }
}

/// Split notes into bullet lines, dropping the bullet prefix
///
/// Blank lines are skipped.
#[must_use]
pub fn note_lines(notes: &str) -> Vec<String> {
    notes
        .lines()
        .map(|line| line.chars().skip(NOTE_BULLET_WIDTH).collect::<String>())
        .filter(|line| !line.trim().is_empty())
        .collect()
}
