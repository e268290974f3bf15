//! Vault module — encrypted credential storage.
//!
//! This module provides:
//! - `CredentialRecord`, `Category` and `Vault` types (`record`)
//! - Blob reading and atomic overwrite on disk (`file`)
//! - The `VaultStore` read-modify-write entry points (`store`)

pub mod file;
pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use record::{Category, CredentialRecord, UpsertOutcome, Vault};
pub use store::VaultStore;
