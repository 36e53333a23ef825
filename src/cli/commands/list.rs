//! Menu action 2: show every stored credential.

use crate::cli::output;
use crate::vault::Vault;

pub fn execute(vault: &Vault) {
    output::info(&format!("{} saved site(s)", vault.len()));
    output::print_credentials_table(vault);
}
