//! Cryptographic primitives for SiteVault.
//!
//! This module provides:
//! - AES-256-GCM sealing and opening of vault blobs (`encryption`)
//! - The zeroize-on-drop `VaultKey` wrapper (`keys`)
//! - Keyfile generation and loading (`keyfile`)

pub mod encryption;
pub mod keyfile;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, VaultKey};
pub use encryption::{open, seal, KEY_LEN, NONCE_LEN, TAG_LEN};
pub use keyfile::{generate_keyfile, load_keyfile};
pub use keys::VaultKey;
