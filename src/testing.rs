//! Testing utilities for media-gallery
//!
//! Fixture catalogs and small helpers shared by unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::media::MediaItem;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Held by every test that reads or writes `MEDIA_GALLERY_*` variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// A small catalog modelled on the March for Science case study
///
/// Contains one untagged item, one item with an unparseable date, and items
/// spread over three types.
#[must_use]
pub fn sample_items() -> Vec<MediaItem> {
    vec![
        MediaItem::new(1u64, "Facebook widget", "image", "2017-05-01")
            .with_description("Widget showing a user's local senators")
            .with_tags(["policy", "social media"])
            .with_notes("- Asks followers to contact representatives\n- Shown on the event page")
            .with_link("https://facebook.com/marchforscience"),
        MediaItem::new(2u64, "March poster", "image", "2017-04-01")
            .with_description("Poster carried on Earth Day")
            .with_tags(["march"])
            .with_image("https://example.org/poster.png"),
        MediaItem::new(3u64, "Organizer livestream", "video", "2017-04-22T14:00:00Z")
            .with_description("Speeches from the main stage")
            .with_tags(["march", "social media"]),
        MediaItem::new(4u64, "Op-ed on advocacy", "article", "2017-06-10")
            .with_description("Argues for science-based policy at the local level")
            .with_tags(["policy"]),
        MediaItem::new(5u64, "Untitled flyer", "image", "unknown"),
    ]
}

/// Collect ids from a visible list for compact assertions
#[must_use]
pub fn ids<'a>(items: &[&'a MediaItem]) -> Vec<&'a str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

/// Write a catalog file into `dir` and return its path
///
/// # Panics
/// Panics if the file cannot be written.
pub fn write_catalog(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test catalog");
    path
}

/// Run `f` with one environment variable set, removing it afterwards
///
/// Keep assertions outside `f` so a failure cannot leave the variable behind.
pub fn with_env_var<T>(key: &str, value: &str, f: impl FnOnce() -> T) -> T {
    let _env = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    // SAFETY: tests touching the environment serialize on ENV_LOCK
    unsafe { std::env::set_var(key, value) };
    let result = f();
    // SAFETY: as above
    unsafe { std::env::remove_var(key) };
    result
}
