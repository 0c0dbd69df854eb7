//! Show command - detail view of a single item

use crate::{
    GalleryError,
    cli::{DetailFormat, ShowArgs},
    detail::ItemDetail,
    gallery::GallerySession,
    output,
    store::MediaStore,
};
use std::io::Write;

type Result<T> = std::result::Result<T, GalleryError>;

/// Execute the show command
///
/// # Errors
/// Returns `GalleryError::ItemNotFound` for unknown ids, or an error if
/// writing the output fails.
pub fn execute<W: Write>(
    store: &MediaStore,
    args: &ShowArgs,
    placeholder_image: &str,
    out: &mut W,
) -> Result<()> {
    let mut session = GallerySession::new();
    session.show_modal(args.id.as_str());

    let item = session
        .active_item(store.all_items())
        .ok_or_else(|| GalleryError::ItemNotFound(args.id.as_str().into()))?;
    let detail = ItemDetail::from_item(item, placeholder_image);

    match args.format {
        DetailFormat::Text => writeln!(out, "{}", output::detail_text(&detail))?,
        DetailFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &detail)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
