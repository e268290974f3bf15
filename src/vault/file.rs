//! Reading and atomically overwriting the vault blob on disk.
//!
//! The blob is opaque here; sealing happens in `crypto::encryption`.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{Result, SiteVaultError};

/// Read the blob at `path`, or `None` if no vault file exists yet.
pub fn read_blob_if_exists(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Read the blob at `path`, failing with `FileNotFound` if it is absent.
pub fn read_blob(path: &Path) -> Result<Vec<u8>> {
    read_blob_if_exists(path)?.ok_or_else(|| SiteVaultError::FileNotFound(path.to_path_buf()))
}

/// Overwrite `path` with `bytes` **atomically**.
///
/// 1. Write to a freshly created temp file in the same directory
///    (owner-only on Unix).  A stale temp file is removed first.
/// 2. Flush and fsync it.
/// 3. Rename it over the target path.
///
/// The temp file is removed on any failure, so the target is either the
/// old file or the complete new one.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !parent.exists() {
        fs::create_dir_all(&parent)?;
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| {
            std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("vault path {} has no file name", path.display()),
            )
        })?
        .to_string_lossy();
    let tmp_path = parent.join(format!(".{file_name}.tmp"));

    match fs::remove_file(&tmp_path) {
        Ok(()) => debug!(path = %tmp_path.display(), "removed stale temp file"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let result = write_and_sync(&tmp_path, bytes).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    debug!(path = %path.display(), len = bytes.len(), "wrote vault blob");
    Ok(())
}

fn write_and_sync(tmp_path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file: File = options.open(tmp_path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
