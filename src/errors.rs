use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in SiteVault.
#[derive(Debug, Error)]
pub enum SiteVaultError {
    // --- Crypto errors ---
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Malformed blob: {0} bytes is too short to hold a nonce and tag")]
    MalformedBlob(usize),

    #[error("Authentication failed — wrong key or tampered data")]
    AuthenticationFailed,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    // --- Vault errors ---
    #[error("Vault data is corrupt: {0}")]
    CorruptVaultData(String),

    #[error("Vault not found at {0}")]
    FileNotFound(PathBuf),

    // --- Keyfile errors ---
    #[error("Keyfile error: {0}")]
    KeyfileError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for SiteVault results.
pub type Result<T> = std::result::Result<T, SiteVaultError>;
