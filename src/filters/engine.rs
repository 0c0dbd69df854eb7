//! Visible-item selection
//!
//! Stateless predicates over a single `MediaItem` plus `select_visible`, which
//! applies all of them and orders the result by access date.

use crate::media::{MediaItem, TypeSelection};
use chrono::{DateTime, Utc};

use super::types::FilterState;

/// Case-insensitive substring match over title, description and notes
///
/// An empty `search_value` never matches here; callers treat an empty search
/// as "match everything" before reaching this predicate.
#[must_use]
pub fn matches_search(item: &MediaItem, search_value: &str) -> bool {
    if search_value.is_empty() {
        return false;
    }
    matches_lowered(item, &search_value.to_lowercase())
}

fn matches_lowered(item: &MediaItem, needle: &str) -> bool {
    let contains = |text: &str| !text.is_empty() && text.to_lowercase().contains(needle);

    contains(&item.title)
        || contains(&item.description)
        || item.notes.as_deref().is_some_and(contains)
}

/// True if no tags are active, or the item shares at least one active tag
#[must_use]
pub fn matches_tag_filters(item: &MediaItem, tag_filters: &[String]) -> bool {
    if tag_filters.is_empty() {
        return true;
    }
    item.tags.iter().any(|tag| tag_filters.contains(tag))
}

/// True for the `all` wildcard or an exact, case-sensitive type match
#[must_use]
pub fn matches_type(item: &MediaItem, type_selection: &TypeSelection) -> bool {
    match type_selection {
        TypeSelection::All => true,
        TypeSelection::Only(label) => item.media_type == *label,
    }
}

/// Ordering key for `dateAccessed`
///
/// Unparseable timestamps map to `None`, which orders before every parsed one.
fn sort_key(item: &MediaItem) -> Option<DateTime<Utc>> {
    let parsed = item.accessed_at();
    if parsed.is_none() {
        tracing::debug!(
            id = %item.id,
            raw = %item.date_accessed,
            "unparseable dateAccessed, sorting item first"
        );
    }
    parsed
}

/// Compute the visible, ordered subset of `items` for `state`
///
/// Items pass when they satisfy the search, type and tag filters. The result is
/// sorted ascending by access date; ties keep their input order. `items` is
/// only borrowed, so repeated calls with the same inputs return the same list.
#[must_use]
pub fn select_visible<'a>(items: &'a [MediaItem], state: &FilterState) -> Vec<&'a MediaItem> {
    let needle = state.search_value.to_lowercase();

    let mut visible: Vec<&MediaItem> = items
        .iter()
        .filter(|item| matches_tag_filters(item, &state.tag_filters))
        .filter(|item| matches_type(item, &state.type_selection))
        .filter(|item| needle.is_empty() || matches_lowered(item, &needle))
        .collect();

    // stable
    visible.sort_by_cached_key(|item| sort_key(item));

    tracing::trace!(
        total = items.len(),
        visible = visible.len(),
        "selected visible media items"
    );

    visible
}

/// Extension trait adding `select_visible` to slices of media items
///
/// ```
/// use media_gallery::filters::{FilterState, MediaFilterExt};
/// use media_gallery::media::MediaItem;
///
/// let items = vec![MediaItem::new("a", "Poster", "image", "2017-04-01")];
/// assert_eq!(items.select_visible(&FilterState::new()).len(), 1);
/// ```
pub trait MediaFilterExt {
    /// See [`select_visible`]
    fn select_visible(&self, state: &FilterState) -> Vec<&MediaItem>;
}

impl MediaFilterExt for [MediaItem] {
    fn select_visible(&self, state: &FilterState) -> Vec<&MediaItem> {
        select_visible(self, state)
    }
}
