//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Settings;
use crate::crypto::{load_keyfile, VaultKey};
use crate::errors::{Result, SiteVaultError};

/// Environment variable holding a base64-encoded key (scripted use).
pub const KEY_ENV_VAR: &str = "SITEVAULT_KEY";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "SITEVAULT_LOG";

/// Longest accepted category or record name.
const MAX_NAME_LEN: usize = 256;

/// SiteVault CLI: encrypted store for site credentials.
#[derive(Parser)]
#[command(
    name = "sitevault",
    about = "Encrypted vault for site credentials",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault file (default: `vault_file` from .sitevault.toml)
    #[arg(long, global = true)]
    pub vault: Option<String>,

    /// Keyfile holding the 32-byte vault key (default: `keyfile` from .sitevault.toml)
    #[arg(long, global = true)]
    pub keyfile: Option<String>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate a new random keyfile
    Keygen {
        /// Where to write the keyfile (default: the configured keyfile path)
        path: Option<String>,
    },

    /// Add a credential (existing entries are kept unless --update is given)
    Add(AddArgs),

    /// Print the decrypted vault document
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List stored credentials (passwords are never shown)
    List {
        /// Only show this category
        category: Option<String>,
    },
}

/// Arguments for `sitevault add`.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Category to file the credential under (e.g. work)
    pub category: String,

    /// Name of the credential within its category (e.g. github)
    pub name: String,

    /// Site address (prompted if omitted)
    #[arg(long)]
    pub site: Option<String>,

    /// Login name (prompted if omitted)
    #[arg(long)]
    pub username: Option<String>,

    /// Password (prompted if omitted; read from stdin when piped)
    #[arg(long)]
    pub password: Option<String>,

    /// Replace the credential if the name already exists
    #[arg(short, long)]
    pub update: bool,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Install the stderr log subscriber.
///
/// `SITEVAULT_LOG` takes precedence; otherwise `--verbose` selects
/// `debug` and the default is `warn`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false),
        )
        .try_init();
}

/// Load `.sitevault.toml` from the current directory.
pub fn settings() -> Result<(PathBuf, Settings)> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    Ok((cwd, settings))
}

/// Resolve the vault file path: `--vault`, else the configured one.
pub fn vault_path(cli: &Cli) -> Result<PathBuf> {
    let (cwd, settings) = settings()?;
    Ok(match &cli.vault {
        Some(path) => cwd.join(path),
        None => settings.vault_path(&cwd),
    })
}

/// Resolve the keyfile path: `--keyfile`, else the configured one.
pub fn keyfile_path(cli: &Cli) -> Result<PathBuf> {
    let (cwd, settings) = settings()?;
    Ok(match &cli.keyfile {
        Some(path) => cwd.join(path),
        None => settings.keyfile_path(&cwd),
    })
}

/// Get the vault key, trying in order:
/// 1. `SITEVAULT_KEY` env var (base64, for CI/scripts)
/// 2. The keyfile (`--keyfile` or configured path)
pub fn load_key(cli: &Cli) -> Result<VaultKey> {
    if let Ok(encoded) = std::env::var(KEY_ENV_VAR) {
        if !encoded.trim().is_empty() {
            tracing::debug!("using key from {KEY_ENV_VAR}");
            return VaultKey::from_base64(&encoded);
        }
    }

    let path = keyfile_path(cli)?;
    tracing::debug!(path = %path.display(), "loading keyfile");
    load_keyfile(&path).map_err(|e| {
        output::tip("Run `sitevault keygen` to create a keyfile.");
        e
    })
}

/// Validate a category or record name.
///
/// Must be non-empty, at most 256 bytes of UTF-8, and free of control characters.
pub fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(SiteVaultError::CommandFailed(format!(
            "{kind} name cannot be empty"
        )));
    }

    if name.len() > MAX_NAME_LEN {
        return Err(SiteVaultError::CommandFailed(format!(
            "{kind} name cannot exceed {MAX_NAME_LEN} bytes"
        )));
    }

    if name.chars().any(char::is_control) {
        return Err(SiteVaultError::CommandFailed(format!(
            "{kind} name '{}' contains control characters",
            name.escape_debug()
        )));
    }

    Ok(())
}
