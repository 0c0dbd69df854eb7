//! Gallery filtering
//!
//! This module computes which media items are visible for a given filter state.
//!
//! # Filter categories
//!
//! - **Search**: case-insensitive substring match over title, description and notes
//! - **Type**: exact match against one type label, or the `all` wildcard
//! - **Tags**: the item must share at least one tag with the active tag set
//!
//! The three categories are AND-combined. Survivors are ordered by `dateAccessed`,
//! oldest first, with a stable sort so equal timestamps keep catalog order.
//!
//! # Examples
//!
//! ```
//! use media_gallery::filters::{FilterState, select_visible};
//! use media_gallery::media::MediaItem;
//!
//! let items = vec![
//!     MediaItem::new(1u64, "Facebook widget", "image", "2017-05-01"),
//!     MediaItem::new(2u64, "March poster", "image", "2017-04-01"),
//! ];
//!
//! let visible = select_visible(&items, &FilterState::new());
//! assert_eq!(visible[0].id.as_str(), "2");
//!
//! let state = FilterState::new().with_search("facebook");
//! let visible = select_visible(&items, &state);
//! assert_eq!(visible.len(), 1);
//! ```

pub mod engine;
pub mod types;

pub use engine::{MediaFilterExt, matches_search, matches_tag_filters, matches_type, select_visible};
pub use types::FilterState;
