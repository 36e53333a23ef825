use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in SecureNest.
#[derive(Debug, Error)]
pub enum SecureNestError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Wrong master password or corrupted vault")]
    AuthenticationFailure,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Salt errors ---
    #[error("Salt file not found at {0}")]
    MissingSalt(PathBuf),

    #[error("Invalid salt file at {path}: {reason}")]
    InvalidSalt { path: PathBuf, reason: String },

    // --- Vault errors ---
    #[error("Vault contents are malformed: {0}")]
    MalformedRecord(String),

    #[error("Vault at {0} is in use by another process")]
    VaultLocked(PathBuf),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Prompt failed: {0}")]
    PromptFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for SecureNest results.
pub type Result<T> = std::result::Result<T, SecureNestError>;
