//! High-level vault operations used by the CLI.
//!
//! `VaultStore` ties the blob file, the cipher and the JSON encoding
//! together behind two calls, `load` and `save`.  Opening a store takes the
//! process lock, which is held until the store is dropped.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::crypto::encryption::{decrypt, encrypt};
use crate::crypto::keys::DerivedKey;
use crate::errors::Result;

use super::credential::Vault;
use super::format;
use super::lock::VaultLock;

/// Handle on the encrypted vault file.
#[derive(Debug)]
pub struct VaultStore {
    /// Path to the encrypted blob on disk.
    path: PathBuf,

    /// Held for the lifetime of the store.
    _lock: VaultLock,
}

impl VaultStore {
    /// Open the store described by `settings`, taking the vault lock.
    ///
    /// Does not read or decrypt anything yet.
    pub fn open(settings: &Settings) -> Result<Self> {
        let lock = VaultLock::acquire(&settings.lock_path)?;
        Ok(Self {
            path: settings.vault_path.clone(),
            _lock: lock,
        })
    }

    /// Returns `true` once a vault blob has been saved.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decrypt the vault.
    ///
    /// A missing file is the bootstrap case and yields an empty vault
    /// without touching the cipher.  Otherwise a failed tag check comes
    /// back as `AuthenticationFailure` and is never papered over with an
    /// empty vault.
    pub fn load(&self, key: &DerivedKey) -> Result<Vault> {
        let Some(blob) = format::read_blob(&self.path)? else {
            info!(path = %self.path.display(), "no vault yet, starting empty");
            return Ok(Vault::new());
        };

        let plaintext = Zeroizing::new(decrypt(key, &blob)?);
        let vault = format::decode_vault(&plaintext)?;

        debug!(
            path = %self.path.display(),
            bytes = blob.len(),
            sites = vault.len(),
            "vault loaded"
        );
        Ok(vault)
    }

    /// Encrypt the vault under `key` and atomically replace the file.
    pub fn save(&self, key: &DerivedKey, vault: &Vault) -> Result<()> {
        let plaintext = format::encode_vault(vault)?;
        let blob = encrypt(key, &plaintext)?;

        format::write_blob(&self.path, &blob)?;

        debug!(
            path = %self.path.display(),
            bytes = blob.len(),
            sites = vault.len(),
            "vault saved"
        );
        Ok(())
    }
}
