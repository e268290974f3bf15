use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SiteVaultError};

/// Project-level configuration, loaded from `.sitevault.toml`.
///
/// Every field has a default so SiteVault works without any config
/// file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Encrypted vault file, relative to the project root unless absolute.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// 32-byte keyfile, relative to the project root unless absolute.
    #[serde(default = "default_keyfile")]
    pub keyfile: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_file() -> String {
    "sitevault.data".to_string()
}

fn default_keyfile() -> String {
    ".sitevault/key".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_file: default_vault_file(),
            keyfile: default_keyfile(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".sitevault.toml";

    /// Load settings from `<project_dir>/.sitevault.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        toml::from_str(&contents).map_err(|e| {
            SiteVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })
    }

    /// Full path to the vault file.
    pub fn vault_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.vault_file)
    }

    /// Full path to the keyfile.
    pub fn keyfile_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.keyfile)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
