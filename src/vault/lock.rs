//! Process-lifetime lock on the vault.
//!
//! On Unix an exclusive, non-blocking `flock` is taken on a dedicated lock
//! file and released when the guard drops (closing the descriptor releases
//! it too, so a crashed process never leaves a stale lock).  Other targets
//! get an unlocked guard.

use std::path::{Path, PathBuf};

use crate::errors::Result;

#[cfg(unix)]
mod imp {
    use std::fs::{self, File, OpenOptions};
    use std::io;
    use std::os::unix::fs::OpenOptionsExt;
    use std::os::unix::io::AsRawFd;
    use std::path::Path;

    use crate::errors::{Result, SecureNestError};

    #[derive(Debug)]
    pub struct LockHandle {
        file: File,
    }

    pub fn acquire(path: &Path) -> Result<LockHandle> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .mode(0o600)
            .open(path)?;

        // SAFETY: the descriptor belongs to `file`, which outlives the call.
        let rc = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
        if rc != 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::WouldBlock {
                return Err(SecureNestError::VaultLocked(path.to_path_buf()));
            }
            return Err(err.into());
        }

        Ok(LockHandle { file })
    }

    impl Drop for LockHandle {
        fn drop(&mut self) {
            // SAFETY: same descriptor as above, still open.
            unsafe {
                libc::flock(self.file.as_raw_fd(), libc::LOCK_UN);
            }
        }
    }
}

#[cfg(not(unix))]
mod imp {
    use std::path::Path;

    use crate::errors::Result;

    #[derive(Debug)]
    pub struct LockHandle;

    pub fn acquire(path: &Path) -> Result<LockHandle> {
        tracing::warn!(
            path = %path.display(),
            "advisory locking is not supported on this platform; concurrent sessions are not prevented"
        );
        Ok(LockHandle)
    }
}

/// Exclusive lock held for as long as this value lives.
#[derive(Debug)]
pub struct VaultLock {
    path: PathBuf,
    _handle: imp::LockHandle,
}

impl VaultLock {
    /// Take the lock without blocking.
    ///
    /// Fails with `VaultLocked` if another session already holds it.
    pub fn acquire(path: &Path) -> Result<Self> {
        let handle = imp::acquire(path)?;
        tracing::debug!(path = %path.display(), "vault lock acquired");
        Ok(Self {
            path: path.to_path_buf(),
            _handle: handle,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
