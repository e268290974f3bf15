//! The logical vault document: category -> name -> credential.
//!
//! Serialized as plain nested JSON objects, e.g.
//!
//! ```text
//! { "work": { "github": { "site": "...", "username": "...", "password": "..." } } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::errors::{Result, SiteVaultError};

/// A stored site login.  Replaced wholesale on update, never patched.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize)]
#[zeroize(drop)]
pub struct CredentialRecord {
    pub site: String,
    pub username: String,
    pub password: String,
}

impl CredentialRecord {
    pub fn new(
        site: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("site", &self.site)
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Records within one category, keyed by record name.
pub type Category = BTreeMap<String, CredentialRecord>;

/// What an upsert did to the target record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No vault file existed; a new one was written holding just this record.
    Created,
    /// The name was absent from its category and was added.
    Inserted,
    /// The name existed and was replaced because `update` was set.
    Updated,
    /// The name existed and `update` was not set; the old record was kept.
    Unchanged,
}

/// The whole vault: category name -> `Category`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vault {
    categories: BTreeMap<String, Category>,
}

impl Vault {
    /// Create an empty vault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a decrypted vault document.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| SiteVaultError::CorruptVaultData(e.to_string()))
    }

    /// Serialize to the on-disk document (indented JSON).
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| SiteVaultError::CorruptVaultData(e.to_string()))
    }

    /// Merge one record into the vault.
    ///
    /// An absent name is always inserted.  A present name is replaced only
    /// when `update` is true; otherwise the existing record is kept as is.
    pub fn upsert(
        &mut self,
        category: &str,
        name: &str,
        record: CredentialRecord,
        update: bool,
    ) -> UpsertOutcome {
        let entries = self.categories.entry(category.to_string()).or_default();

        match entries.get_mut(name) {
            Some(existing) if update => {
                *existing = record;
                UpsertOutcome::Updated
            }
            Some(_) => UpsertOutcome::Unchanged,
            None => {
                entries.insert(name.to_string(), record);
                UpsertOutcome::Inserted
            }
        }
    }

    /// Look up a single record.
    pub fn get(&self, category: &str, name: &str) -> Option<&CredentialRecord> {
        self.categories.get(category)?.get(name)
    }

    /// Look up a whole category.
    pub fn category(&self, category: &str) -> Option<&Category> {
        self.categories.get(category)
    }

    /// Iterate categories in name order.
    pub fn categories(&self) -> impl Iterator<Item = (&String, &Category)> {
        self.categories.iter()
    }

    /// Total number of records across all categories.
    pub fn record_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
