//! AES-256-GCM authenticated encryption.
//!
//! Each call to `seal` generates a fresh random 12-byte nonce and
//! prepends it to the ciphertext.  `open` splits the nonce back out
//! before decrypting.
//!
//! Layout of a sealed blob:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use crate::errors::{Result, SiteVaultError};

/// Required key size for AES-256-GCM.
pub const KEY_LEN: usize = 32;

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Build the cipher, rejecting keys of the wrong size up front.
fn cipher_for(key: &[u8]) -> Result<Aes256Gcm> {
    if key.len() != KEY_LEN {
        return Err(SiteVaultError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: key.len(),
        });
    }
    Aes256Gcm::new_from_slice(key).map_err(|_| SiteVaultError::InvalidKeyLength {
        expected: KEY_LEN,
        actual: key.len(),
    })
}

/// Seal `plaintext` under a 32-byte `key`.
///
/// Returns `nonce || ciphertext || tag`, i.e. exactly
/// `NONCE_LEN + plaintext.len() + TAG_LEN` bytes.
pub fn seal(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = cipher_for(key)?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| SiteVaultError::EncryptionFailed(format!("aead seal: {e}")))?;

    // Prepend the nonce so the blob is self-describing.
    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Open a blob produced by `seal`.
///
/// Nothing is returned unless the tag verifies.  A wrong key and a
/// tampered blob both surface as `AuthenticationFailed`.
pub fn open(key: &[u8], blob: &[u8]) -> Result<Vec<u8>> {
    let cipher = cipher_for(key)?;

    if blob.len() < NONCE_LEN + TAG_LEN {
        return Err(SiteVaultError::MalformedBlob(blob.len()));
    }

    let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| SiteVaultError::AuthenticationFailed)
}
