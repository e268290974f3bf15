//! `sitevault export` — print or save the decrypted vault document.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{load_key, vault_path, Cli};
use crate::errors::{Result, SiteVaultError};
use crate::vault::file::write_atomic;
use crate::vault::VaultStore;

/// Execute the `export` command.
pub fn execute(cli: &Cli, output_path: Option<&str>) -> Result<()> {
    let path = vault_path(cli)?;
    let key = load_key(cli)?;

    let plaintext = Zeroizing::new(VaultStore::new(&path).export(key.as_bytes())?);

    match output_path {
        Some(dest) => {
            let dest_path = resolve_output(&std::env::current_dir()?.join(dest))?;

            // Safety: refuse to overwrite the vault with its own plaintext.
            if dest_path == fs::canonicalize(&path)? {
                return Err(SiteVaultError::CommandFailed(
                    "refusing to export over the vault file".into(),
                ));
            }

            write_atomic(&dest_path, &plaintext)?;
            output::success(&format!("Exported vault to {dest}"));
            output::warning("The exported file is unencrypted. Delete it when done.");
        }
        None => {
            // Write to stdout (no success message, just raw output).
            let mut stdout = io::stdout().lock();
            stdout.write_all(&plaintext)?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Resolve `dest` to `<canonical parent>/<file name>`, creating the parent.
///
/// `..` components and symlinked directories are resolved, so the result
/// can be compared against the canonical vault path.
fn resolve_output(dest: &Path) -> Result<PathBuf> {
    let file_name = dest.file_name().ok_or_else(|| {
        SiteVaultError::CommandFailed(format!("output path {} has no file name", dest.display()))
    })?;
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    Ok(fs::canonicalize(parent)?.join(file_name))
}
