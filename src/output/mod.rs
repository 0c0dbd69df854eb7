//! Output formatting for CLI display
//!
//! This module provides the text rendering for item listings, tag counts,
//! type options and the detail view, plus colored status messages.

use crate::detail::ItemDetail;
use crate::media::{MediaItem, TypeSelection};
use colored::Colorize;

/// Format a media item as one listing line
#[must_use]
pub fn item_line(item: &MediaItem, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", item.id, item.title);
    }

    let tags = if item.has_tags() {
        format!(" [{}]", item.tags.join(", "))
    } else {
        String::new()
    };

    format!(
        "  {:>4}  {}  {}  ({}){}",
        item.id.to_string().bold(),
        item.date_accessed.dimmed(),
        item.title,
        item.media_type.cyan(),
        tags
    )
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} (used by {count} item(s))")
    }
}

/// Format a type option, marking the wildcard
#[must_use]
pub fn type_option(selection: &TypeSelection, quiet: bool) -> String {
    if quiet || !selection.is_all() {
        selection.label().to_string()
    } else {
        format!("{} {}", selection.label(), "(no type restriction)".dimmed())
    }
}

/// Render the detail view as multi-line text
#[must_use]
pub fn detail_text(detail: &ItemDetail) -> String {
    let mut lines = Vec::new();

    match &detail.link {
        Some(link) => lines.push(format!("{}  {}", detail.title.bold(), link.underline())),
        None => lines.push(detail.title.bold().to_string()),
    }
    lines.push(detail.accessed.dimmed().to_string());
    lines.push(format!("Image: {}", detail.image));

    if !detail.tags.is_empty() {
        lines.push(format!("Tags: {}", detail.tags.join(", ")));
    }

    if !detail.description.is_empty() {
        lines.push(String::new());
        lines.push(detail.description.clone());
    }

    if !detail.note_lines.is_empty() {
        lines.push(String::new());
        for note in &detail.note_lines {
            lines.push(format!("  • {note}"));
        }
    }

    lines.join("\n")
}

/// Summary line printed above a listing
#[must_use]
pub fn visible_summary(visible: usize, total: usize) -> String {
    format!("Showing {visible} of {total} media item(s)")
}

/// Print an error message to stderr
pub fn error(message: &str) {
    eprintln!("{} {}", "❌".red(), message);
}
