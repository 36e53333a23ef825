//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across the menu and every action.

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

pub fn banner() {
    println!("{}", style("SecureNest: local password vault").cyan().bold());
}

pub fn print_menu() {
    println!();
    println!("{}", style("Options:").bold());
    println!("  1. Add a new password");
    println!("  2. View saved passwords");
    println!("  3. Exit");
}

/// Print every stored credential (Site, Username, Password) in plaintext.
pub fn print_credentials_table(vault: &Vault) {
    if vault.is_empty() {
        info("No passwords saved yet.");
        tip("Choose option 1 to add your first one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Site", "Username", "Password"]);

    for (site, cred) in vault {
        table.add_row(vec![
            site.as_str(),
            cred.username.as_str(),
            cred.password.as_str(),
        ]);
    }

    println!("{table}");
}
