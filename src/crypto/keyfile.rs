//! Keyfile storage for the vault key.
//!
//! A keyfile is exactly 32 random bytes, written owner-only.  It is the
//! default way the CLI obtains the caller-supplied key; the vault core
//! never reads it on its own.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use rand::TryRngCore;
use tracing::debug;

use super::encryption::KEY_LEN;
use super::keys::VaultKey;
use crate::errors::{Result, SiteVaultError};

/// Generate a new random keyfile and write it to `path`.
///
/// Never overwrites an existing file.
pub fn generate_keyfile(path: &Path) -> Result<VaultKey> {
    let mut bytes = [0u8; KEY_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| SiteVaultError::KeyfileError(format!("random source failed: {e}")))?;
    let key = VaultKey::new(bytes);
    zeroize::Zeroize::zeroize(&mut bytes);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                SiteVaultError::KeyfileError(format!("cannot create keyfile directory: {e}"))
            })?;
        }
    }

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => SiteVaultError::KeyfileError(format!(
            "keyfile already exists at {}",
            path.display()
        )),
        _ => SiteVaultError::KeyfileError(format!("failed to create keyfile: {e}")),
    })?;
    file.write_all(key.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(|e| SiteVaultError::KeyfileError(format!("failed to write keyfile: {e}")))?;

    debug!(path = %path.display(), "generated keyfile");
    Ok(key)
}

/// Load a keyfile from disk and validate its length.
pub fn load_keyfile(path: &Path) -> Result<VaultKey> {
    let mut data = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            SiteVaultError::KeyfileError(format!("keyfile not found at {}", path.display()))
        }
        _ => SiteVaultError::KeyfileError(format!("failed to read keyfile: {e}")),
    })?;

    let key = if data.len() == KEY_LEN {
        VaultKey::from_slice(&data)
    } else {
        Err(SiteVaultError::KeyfileError(format!(
            "keyfile must be exactly {KEY_LEN} bytes, got {}",
            data.len()
        )))
    };
    zeroize::Zeroize::zeroize(&mut data);
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn generate_then_load_returns_same_key() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keys").join("vault.key");

        let generated = generate_keyfile(&path).unwrap();
        let loaded = load_keyfile(&path).unwrap();
        assert_eq!(generated.as_bytes(), loaded.as_bytes());
        assert_eq!(fs::metadata(&path).unwrap().len(), KEY_LEN as u64);
    }

    #[test]
    fn generate_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("vault.key");
        fs::write(&path, b"existing").unwrap();

        assert!(matches!(
            generate_keyfile(&path),
            Err(SiteVaultError::KeyfileError(_))
        ));
        assert_eq!(fs::read(&path).unwrap(), b"existing");
    }

    #[cfg(unix)]
    #[test]
    fn generated_keyfile_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("vault.key");
        generate_keyfile(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn load_rejects_wrong_length() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("short.key");
        fs::write(&path, [0u8; 10]).unwrap();

        assert!(matches!(
            load_keyfile(&path),
            Err(SiteVaultError::KeyfileError(_))
        ));
    }

    #[test]
    fn load_missing_keyfile_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(load_keyfile(&tmp.path().join("nope")).is_err());
    }
}
