//! Tags command - tag counts for the tag filter chips

use crate::{GalleryError, output, store::MediaStore};
use std::io::Write;

type Result<T> = std::result::Result<T, GalleryError>;

/// Execute the tags command
///
/// Tags are printed in the order they first appear in the catalog.
///
/// # Errors
/// Returns an error if writing the output fails.
pub fn execute<W: Write>(store: &MediaStore, out: &mut W, quiet: bool) -> Result<()> {
    let counts = store.tag_counts();

    if counts.is_empty() {
        if !quiet {
            writeln!(out, "No tags found in catalog.")?;
        }
        return Ok(());
    }

    if !quiet {
        writeln!(out, "Tags in catalog:")?;
    }
    for tc in &counts {
        writeln!(out, "{}", output::tag_with_count(&tc.tag, tc.count, quiet))?;
    }
    Ok(())
}
