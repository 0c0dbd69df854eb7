//! Types command - options for the type picker

use crate::{GalleryError, output, store::MediaStore};
use std::io::Write;

type Result<T> = std::result::Result<T, GalleryError>;

/// Execute the types command
///
/// # Errors
/// Returns an error if writing the output fails.
pub fn execute<W: Write>(store: &MediaStore, out: &mut W, quiet: bool) -> Result<()> {
    for selection in store.distinct_types() {
        writeln!(out, "{}", output::type_option(&selection, quiet))?;
    }
    Ok(())
}
