//! Cryptographic primitives for SecureNest.
//!
//! This module provides:
//! - The per-installation salt file (`salt`)
//! - Argon2id password-based key derivation (`kdf`)
//! - The zeroizing `DerivedKey` wrapper (`keys`)
//! - AES-256-GCM encryption and decryption (`encryption`)

pub mod encryption;
pub mod kdf;
pub mod keys;
pub mod salt;

pub use encryption::{decrypt, encrypt};
pub use kdf::{derive_key, derive_key_with_params, KdfParams};
pub use keys::DerivedKey;
pub use salt::SaltStore;
