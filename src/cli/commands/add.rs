//! `sitevault add` — store a credential in the vault.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::{Input, Password};

use crate::cli::output;
use crate::cli::{load_key, validate_name, vault_path, AddArgs, Cli};
use crate::errors::{Result, SiteVaultError};
use crate::vault::{CredentialRecord, UpsertOutcome, VaultStore};

/// Execute the `add` command.
pub fn execute(cli: &Cli, args: &AddArgs) -> Result<()> {
    validate_name("category", &args.category)?;
    validate_name("record", &args.name)?;

    // Resolve where and with what key before asking for any input.
    let path = vault_path(cli)?;
    let key = load_key(cli)?;

    let site = match &args.site {
        Some(s) => s.clone(),
        None => prompt_field("site")?,
    };
    let username = match &args.username {
        Some(u) => u.clone(),
        None => prompt_field("username")?,
    };
    let password = read_password(args.password.as_deref())?;

    let record = CredentialRecord::new(site, username, password);

    let store = VaultStore::new(&path);
    let outcome = store.upsert(
        key.as_bytes(),
        &args.category,
        &args.name,
        record,
        args.update,
    )?;

    let entry = format!("{}/{}", args.category, args.name);
    match outcome {
        UpsertOutcome::Created => {
            output::success(&format!(
                "Created vault at {} with '{entry}'",
                path.display()
            ));
        }
        UpsertOutcome::Inserted => output::success(&format!("Added '{entry}'")),
        UpsertOutcome::Updated => output::success(&format!("Updated '{entry}'")),
        UpsertOutcome::Unchanged => {
            output::warning(&format!("'{entry}' already exists and was left unchanged."));
            output::tip("Pass --update to replace it.");
        }
    }

    Ok(())
}

/// Prompt for a plain text field.
fn prompt_field(label: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| SiteVaultError::CommandFailed(format!("{label} prompt: {e}")))
}

/// Determine the password from one of three sources.
fn read_password(inline: Option<&str>) -> Result<String> {
    if let Some(p) = inline {
        // Source 1: Inline value on the command line.
        output::warning("Password provided on command line — it may appear in shell history.");
        return Ok(p.to_string());
    }

    if !io::stdin().is_terminal() {
        // Source 2: Piped input, first line only.
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        return Ok(line.trim_end_matches(['\r', '\n']).to_string());
    }

    // Source 3: Interactive hidden prompt.
    Password::new()
        .with_prompt("password")
        .interact()
        .map_err(|e| SiteVaultError::CommandFailed(format!("password prompt: {e}")))
}
