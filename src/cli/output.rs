//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::Vault;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of credentials (Category, Name, Site, Username).
///
/// Passwords are never printed here; use `export` for the full document.
pub fn print_records_table(vault: &Vault, only_category: Option<&str>) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Name", "Site", "Username"]);

    let mut rows = 0;
    for (category, records) in vault.categories() {
        if only_category.is_some_and(|c| c != category.as_str()) {
            continue;
        }
        for (name, record) in records {
            table.add_row(vec![
                category.clone(),
                name.clone(),
                record.site.clone(),
                record.username.clone(),
            ]);
            rows += 1;
        }
    }

    if rows == 0 {
        info("No credentials stored yet.");
        tip("Run `sitevault add <CATEGORY> <NAME>` to add one.");
        return;
    }

    println!("{table}");
}
