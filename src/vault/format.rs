//! On-disk representation of the vault.
//!
//! The vault file is nothing but the cipher output:
//!
//! ```text
//! [nonce: 12 bytes][AES-256-GCM ciphertext of the vault JSON][tag: 16 bytes]
//! ```
//!
//! There is no magic, version field or header.  Everything needed to open
//! the file besides the key is inside the blob itself.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use super::credential::Vault;
use crate::errors::{Result, SecureNestError};

/// Serialize the vault into its canonical JSON bytes.
///
/// The buffer is wiped when dropped since it holds every password in clear.
pub fn encode_vault(vault: &Vault) -> Result<Zeroizing<Vec<u8>>> {
    serde_json::to_vec(vault)
        .map(Zeroizing::new)
        .map_err(|e| SecureNestError::SerializationError(format!("vault: {e}")))
}

/// Parse decrypted bytes back into a vault.
///
/// Bytes that authenticated but are not the expected mapping surface as
/// `MalformedRecord`, distinct from a bad password.
pub fn decode_vault(bytes: &[u8]) -> Result<Vault> {
    serde_json::from_slice(bytes).map_err(|e| SecureNestError::MalformedRecord(e.to_string()))
}

/// Read the encrypted blob, or `None` if no vault has been saved yet.
pub fn read_blob(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(data) => Ok(Some(data)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Write the encrypted blob to disk **atomically**.
///
/// 1. Write to a temp file in the same directory.
/// 2. Flush it to stable storage.
/// 3. Rename the temp file over the target path.
/// 4. Flush the directory so the rename itself survives a crash.
///
/// An interrupted write leaves the previous vault intact.
pub fn write_blob(path: &Path, blob: &[u8]) -> Result<()> {
    let tmp_path = temp_path(path);

    if let Err(e) = write_synced(&tmp_path, blob) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    sync_dir(parent_dir(path))?;
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Flush directory entries (renames, creations) to stable storage.
#[cfg(unix)]
pub fn sync_dir(dir: &Path) -> io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

/// Directories cannot be opened for syncing here; rename durability is
/// left to the filesystem.
#[cfg(not(unix))]
pub fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

/// Temp file used by `write_blob`: `.<name>.tmp` next to the target, so the
/// rename never crosses a filesystem.
pub fn temp_path(path: &Path) -> PathBuf {
    parent_dir(path).join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ))
}

fn write_synced(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.sync_all()
}
