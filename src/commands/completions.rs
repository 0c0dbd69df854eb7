//! Completions command - static shell completion scripts

use crate::{GalleryError, cli::Cli};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

type Result<T> = std::result::Result<T, GalleryError>;

/// Write the completion script for `shell`
///
/// # Errors
/// Returns an error if flushing the output fails.
pub fn execute<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
    out.flush()?;
    Ok(())
}
