//! Read-modify-write operations on an encrypted vault file.
//!
//! `VaultStore` only remembers *where* the vault lives.  Every call
//! reads the blob, opens it with the key it is given, and (for
//! `upsert`) re-seals and overwrites the whole file.  No decrypted
//! state or key material is kept between calls.

use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroizing;

use crate::crypto::encryption::{open, seal};
use crate::errors::Result;

use super::file;
use super::record::{CredentialRecord, UpsertOutcome, Vault};

/// Handle to a vault file on disk.
#[derive(Debug, Clone)]
pub struct VaultStore {
    /// Path to the encrypted vault blob.
    path: PathBuf,
}

impl VaultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert a record, or replace it if `update` is set.
    ///
    /// With no vault file on disk a new vault holding only this record
    /// is written.  Otherwise the existing blob must open under `key`
    /// and parse as a vault; any failure aborts before the file is
    /// touched.  The file is rewritten on every successful call, even
    /// when the record was left unchanged.
    pub fn upsert(
        &self,
        key: &[u8],
        category: &str,
        name: &str,
        record: CredentialRecord,
        update: bool,
    ) -> Result<UpsertOutcome> {
        let (mut vault, existed) = match file::read_blob_if_exists(&self.path)? {
            Some(blob) => {
                let plaintext = Zeroizing::new(open(key, &blob)?);
                (Vault::from_json(&plaintext)?, true)
            }
            None => (Vault::new(), false),
        };

        let mut outcome = vault.upsert(category, name, record, update);
        if !existed {
            outcome = UpsertOutcome::Created;
        }

        let plaintext = Zeroizing::new(vault.to_json()?);
        let blob = seal(key, &plaintext)?;
        file::write_atomic(&self.path, &blob)?;

        debug!(
            path = %self.path.display(),
            category,
            record = name,
            ?outcome,
            records = vault.record_count(),
            "vault upsert"
        );
        Ok(outcome)
    }

    /// Open the vault and return the raw decrypted document.
    pub fn export(&self, key: &[u8]) -> Result<Vec<u8>> {
        let blob = file::read_blob(&self.path)?;
        let plaintext = open(key, &blob)?;
        debug!(path = %self.path.display(), len = plaintext.len(), "vault exported");
        Ok(plaintext)
    }

    /// Open the vault and parse it.
    pub fn load(&self, key: &[u8]) -> Result<Vault> {
        let plaintext = Zeroizing::new(self.export(key)?);
        Vault::from_json(&plaintext)
    }
}
