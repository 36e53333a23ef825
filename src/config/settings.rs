use std::path::{Path, PathBuf};

use crate::errors::Result;

/// Locations of the on-disk artifacts.
///
/// Built once at the entry point and handed to every component, so the
/// salt store, the vault store and the lock all agree on where things live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Raw 16-byte salt file.
    pub salt_path: PathBuf,

    /// Encrypted vault blob.
    pub vault_path: PathBuf,

    /// Advisory lock file held while a session is open.
    pub lock_path: PathBuf,
}

impl Settings {
    pub const SALT_FILE_NAME: &'static str = "salt.salt";
    pub const VAULT_FILE_NAME: &'static str = "vault.enc";
    pub const LOCK_FILE_NAME: &'static str = ".vault.enc.lock";

    /// Place all three artifacts inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            salt_path: dir.join(Self::SALT_FILE_NAME),
            vault_path: dir.join(Self::VAULT_FILE_NAME),
            lock_path: dir.join(Self::LOCK_FILE_NAME),
        }
    }

    /// Process-wide default: artifacts live in the current working directory.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::in_dir(&cwd))
    }
}

// ── Tests ────────────────────────────────────────────────────────────
