//! `sitevault list` — display stored credentials in a table.

use crate::cli::output;
use crate::cli::{load_key, vault_path, Cli};
use crate::errors::{Result, SiteVaultError};
use crate::vault::VaultStore;

/// Execute the `list` command.
pub fn execute(cli: &Cli, category: Option<&str>) -> Result<()> {
    let path = vault_path(cli)?;
    let key = load_key(cli)?;

    let vault = VaultStore::new(&path).load(key.as_bytes())?;

    if let Some(c) = category {
        let records = vault.category(c).ok_or_else(|| {
            SiteVaultError::CommandFailed(format!("category '{c}' not found"))
        })?;
        output::info(&format!("{c} — {} credential(s)", records.len()));
    } else {
        output::info(&format!(
            "{} — {} credential(s) in {} categor{}",
            path.display(),
            vault.record_count(),
            vault.categories().count(),
            if vault.categories().count() == 1 { "y" } else { "ies" }
        ));
    }

    output::print_records_table(&vault, category);

    Ok(())
}
