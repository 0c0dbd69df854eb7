//! Media item model
//!
//! This module defines the read-only data shape supplied by the media catalog:
//! - `MediaItem`: one gallery entry (title, type, tags, notes, access date, links)
//! - `MediaId`: stable identifier, accepted as a number or a string on input
//! - `TypeSelection`: a concrete type label or the `all` wildcard
//!
//! Timestamp parsing for `dateAccessed` lives in [`timestamp`].

pub mod timestamp;
pub mod types;

pub use timestamp::{format_accessed_date, parse_timestamp};
pub use types::{MediaId, MediaItem, TypeSelection, WILDCARD_TYPE};
