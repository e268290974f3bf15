//! `sitevault keygen` — create a new random keyfile.

use std::path::PathBuf;

use crate::cli::output;
use crate::cli::{keyfile_path, Cli};
use crate::crypto::generate_keyfile;
use crate::errors::Result;

/// Execute the `keygen` command.
pub fn execute(cli: &Cli, path: Option<&str>) -> Result<()> {
    let path = match path {
        Some(p) => std::env::current_dir()?.join(PathBuf::from(p)),
        None => keyfile_path(cli)?,
    };

    generate_keyfile(&path)?;

    output::success(&format!("Keyfile written to {}", path.display()));
    output::warning("Back this file up. A vault cannot be opened without the key that sealed it.");
    if path.ends_with(".sitevault/key") {
        output::tip("Add `.sitevault/` to your .gitignore.");
    }

    Ok(())
}
