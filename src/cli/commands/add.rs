//! Menu action 1: add or replace a site's credential.

use zeroize::Zeroizing;

use crate::cli::{output, prompt_secret, prompt_text, validate_site};
use crate::crypto::DerivedKey;
use crate::errors::Result;
use crate::vault::{Vault, VaultStore};

/// Prompt for a site/username/password triple, then save.
pub fn execute(store: &VaultStore, key: &DerivedKey, vault: &mut Vault) -> Result<()> {
    let site = prompt_text("Enter site name", false)?;
    validate_site(&site)?;
    let username = Zeroizing::new(prompt_text("Enter username/email", true)?);
    let password = prompt_secret("Enter password")?;

    let replaced = apply(store, key, vault, &site, &username, &password)?;

    let verb = if replaced { "replaced" } else { "saved securely" };
    output::success(&format!(
        "Password for '{site}' {verb} ({} site(s) total)",
        vault.len()
    ));

    Ok(())
}

/// Insert the credential into a copy of `vault`, persist it, and only then
/// swap it in.  On any error `vault` is left exactly as it was.
///
/// Returns `true` if an existing site was replaced.
pub fn apply(
    store: &VaultStore,
    key: &DerivedKey,
    vault: &mut Vault,
    site: &str,
    username: &str,
    password: &str,
) -> Result<bool> {
    let mut updated = vault.clone();
    let replaced = updated.add_credential(site, username, password);
    store.save(key, &updated)?;
    *vault = updated;
    Ok(replaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::config::Settings;
    use crate::errors::SecureNestError;
    use crate::vault::Credential;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> (Settings, VaultStore) {
        let settings = Settings::in_dir(dir.path());
        let store = VaultStore::open(&settings).unwrap();
        (settings, store)
    }

    #[test]
    fn apply_reports_added_then_replaced() {
        let dir = TempDir::new().unwrap();
        let (_settings, store) = open(&dir);
        let key = DerivedKey::new([3u8; 32]);
        let mut vault = Vault::new();

        assert!(!apply(&store, &key, &mut vault, "example.com", "alice", "one").unwrap());
        assert!(apply(&store, &key, &mut vault, "example.com", "alice", "two").unwrap());

        assert_eq!(vault.len(), 1);
        assert_eq!(
            vault.get("example.com"),
            Some(&Credential::new("alice", "two"))
        );
    }

    #[test]
    fn apply_persists_before_returning() {
        let dir = TempDir::new().unwrap();
        let (_settings, store) = open(&dir);
        let key = DerivedKey::new([4u8; 32]);
        let mut vault = Vault::new();

        apply(&store, &key, &mut vault, "example.com", "alice", "").unwrap();

        let on_disk = store.load(&key).unwrap();
        assert_eq!(on_disk, vault);
        assert_eq!(on_disk.get("example.com").unwrap().password, "");
    }

    #[test]
    fn failed_save_leaves_vault_untouched() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::in_dir(dir.path());

        // A non-empty directory where the vault file should be: the final
        // rename fails regardless of the caller's privileges.
        fs::create_dir(&settings.vault_path).unwrap();
        fs::write(settings.vault_path.join("occupied"), b"x").unwrap();

        let store = VaultStore::open(&settings).unwrap();
        let key = DerivedKey::new([5u8; 32]);
        let mut vault = Vault::new();
        vault.add_credential("kept.io", "bob", "pw");
        let before = vault.clone();

        let err = apply(&store, &key, &mut vault, "new.io", "carol", "pw2").unwrap_err();

        assert!(matches!(err, SecureNestError::Io(_)));
        assert_eq!(vault, before);
        assert!(crate::cli::is_recoverable(&err));
    }
}
