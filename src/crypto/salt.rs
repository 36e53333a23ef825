//! Per-installation salt, persisted as a standalone file.
//!
//! The salt is 16 raw random bytes with no header.  It is created once on
//! first run and never rewritten: a new salt changes the derived key and
//! permanently orphans any existing vault.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rand::TryRngCore;
use tracing::{debug, info};

use crate::errors::{Result, SecureNestError};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Owns the salt artifact at a fixed path.
#[derive(Debug, Clone)]
pub struct SaltStore {
    path: PathBuf,
}

impl SaltStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the salt file if it does not exist yet.
    ///
    /// Idempotent: an existing file is left byte-for-byte untouched.  The
    /// file is opened with create-new semantics, so two processes racing on
    /// first run cannot overwrite each other's salt.
    pub fn ensure_salt(&self) -> Result<()> {
        if self.path.exists() {
            debug!(path = %self.path.display(), "salt already present");
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut salt = [0u8; SALT_LEN];
        rand::rngs::OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("OS RNG failed: {e}")))?;

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);

        // On Unix, restrict permissions to owner-only read/write.
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        match options.open(&self.path) {
            Ok(mut file) => {
                file.write_all(&salt)?;
                file.sync_all()?;
                info!(path = %self.path.display(), "created new salt");
            }
            // Someone else created it between the check and the open.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                debug!(path = %self.path.display(), "salt created concurrently");
            }
            Err(e) => return Err(e.into()),
        }

        Ok(())
    }

    /// Read the persisted salt.
    ///
    /// Fails with `MissingSalt` if `ensure_salt` has never run for this path.
    pub fn read_salt(&self) -> Result<[u8; SALT_LEN]> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SecureNestError::MissingSalt(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        <[u8; SALT_LEN]>::try_from(data.as_slice()).map_err(|_| SecureNestError::InvalidSalt {
            path: self.path.clone(),
            reason: format!("expected exactly {SALT_LEN} bytes, got {}", data.len()),
        })
    }
}
