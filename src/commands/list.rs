//! List command - print the visible media items

use crate::{
    GalleryError,
    cli::{ListArgs, OutputFormat},
    filters::select_visible,
    media::MediaItem,
    output,
    store::{MediaStore, catalog::CSV_TAG_SEPARATOR},
};
use std::io::Write;

type Result<T> = std::result::Result<T, GalleryError>;

/// CSV header, matching the catalog import layout
const CSV_HEADER: [&str; 9] = [
    "id",
    "title",
    "type",
    "description",
    "notes",
    "tags",
    "dateAccessed",
    "image",
    "link",
];

/// Execute the list command
///
/// # Errors
/// Returns an error if writing or serializing the output fails.
pub fn execute<W: Write>(store: &MediaStore, args: &ListArgs, out: &mut W, quiet: bool) -> Result<()> {
    let state = args.filter.to_filter_state();
    let visible = select_visible(store.all_items(), &state);

    tracing::info!(
        search = %state.search_value,
        media_type = %state.type_selection,
        tags = ?state.tag_filters,
        visible = visible.len(),
        "listing media"
    );

    match args.format {
        OutputFormat::Text => write_text(&visible, store.len(), out, quiet),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &visible)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => write_csv(&visible, out),
    }
}

fn write_text<W: Write>(visible: &[&MediaItem], total: usize, out: &mut W, quiet: bool) -> Result<()> {
    if visible.is_empty() {
        if !quiet {
            writeln!(out, "No media items match the current filters.")?;
        }
        return Ok(());
    }

    if !quiet {
        writeln!(out, "{}", output::visible_summary(visible.len(), total))?;
    }
    for item in visible {
        writeln!(out, "{}", output::item_line(item, quiet))?;
    }
    Ok(())
}

fn write_csv<W: Write>(visible: &[&MediaItem], out: &mut W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(CSV_HEADER)?;

    let separator = CSV_TAG_SEPARATOR.to_string();
    for item in visible {
        let tags = item.tags.join(&separator);
        let notes = item.notes.as_deref().unwrap_or_default().replace('\n', "\\n");
        wtr.write_record([
            item.id.as_str(),
            item.title.as_str(),
            item.media_type.as_str(),
            item.description.as_str(),
            notes.as_str(),
            tags.as_str(),
            item.date_accessed.as_str(),
            item.image.as_deref().unwrap_or_default(),
            item.link.as_deref().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
