//! Vault module: encrypted credential storage.
//!
//! This module provides:
//! - `Credential` and `Vault` types (`credential`)
//! - Canonical encoding and atomic blob I/O (`format`)
//! - The process-lifetime vault lock (`lock`)
//! - `VaultStore` with `load` / `save` (`store`)

pub mod credential;
pub mod format;
pub mod lock;
pub mod store;

pub use credential::{Credential, Vault};
pub use lock::VaultLock;
pub use store::VaultStore;
