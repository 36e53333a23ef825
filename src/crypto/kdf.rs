//! Master password + installation salt -> vault key, via Argon2id.
//!
//! The cost parameters are fixed at compile time.  Nothing on disk records
//! them, so changing the defaults would orphan every existing vault.

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroize;

use super::keys::{DerivedKey, KEY_LEN};
use crate::errors::{Result, SecureNestError};

/// Argon2id cost knobs.  Production always uses `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// KiB of memory per derivation.
    pub memory_kib: u32,
    /// Passes over memory.
    pub iterations: u32,
    /// Lanes.
    pub parallelism: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            memory_kib: 65_536,
            iterations: 3,
            parallelism: 4,
        }
    }
}

/// Lowest memory cost accepted, in KiB.
pub const MIN_MEMORY_KIB: u32 = 8_192;

/// Derive the vault key with the production parameters.
///
/// No I/O and no randomness: a given password and salt map to one key,
/// every session.
pub fn derive_key(password: &[u8], salt: &[u8]) -> Result<DerivedKey> {
    derive_key_with_params(password, salt, &KdfParams::default())
}

/// Derive the vault key with caller-chosen parameters.
///
/// Fails with `KeyDerivationFailed` below 8 MiB, 1 pass or 1 lane.
pub fn derive_key_with_params(
    password: &[u8],
    salt: &[u8],
    kdf_params: &KdfParams,
) -> Result<DerivedKey> {
    if kdf_params.memory_kib < MIN_MEMORY_KIB {
        return Err(SecureNestError::KeyDerivationFailed(format!(
            "Argon2 memory_kib must be at least {MIN_MEMORY_KIB} (got {})",
            kdf_params.memory_kib
        )));
    }
    if kdf_params.iterations < 1 {
        return Err(SecureNestError::KeyDerivationFailed(
            "Argon2 iterations must be at least 1".into(),
        ));
    }
    if kdf_params.parallelism < 1 {
        return Err(SecureNestError::KeyDerivationFailed(
            "Argon2 parallelism must be at least 1".into(),
        ));
    }

    let params = Params::new(
        kdf_params.memory_kib,
        kdf_params.iterations,
        kdf_params.parallelism,
        Some(KEY_LEN),
    )
    .map_err(|e| SecureNestError::KeyDerivationFailed(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; KEY_LEN];
    argon2
        .hash_password_into(password, salt, &mut key)
        .map_err(|e| {
            SecureNestError::KeyDerivationFailed(format!("Argon2id hashing failed: {e}"))
        })?;

    let derived = DerivedKey::new(key);
    key.zeroize();

    Ok(derived)
}
