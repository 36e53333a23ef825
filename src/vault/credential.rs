//! Credential records and the in-memory vault mapping.
//!
//! The vault serializes as a JSON object keyed by site name:
//! `{"example.com": {"username": "alice", "password": "s3cret"}}`.
//! Sites are kept in a `BTreeMap` so the encoding is canonical.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A username/password pair stored for one site.
///
/// Both fields are wiped from memory when the record is dropped.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Mapping from site name to its credential.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vault {
    entries: BTreeMap<String, Credential>,
}

impl Vault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the credential for `site`.
    ///
    /// Returns `true` if an existing record was replaced.  This only
    /// touches memory; persisting is the caller's job (`VaultStore::save`).
    pub fn add_credential(&mut self, site: &str, username: &str, password: &str) -> bool {
        self.entries
            .insert(site.to_string(), Credential::new(username, password))
            .is_some()
    }

    pub fn get(&self, site: &str) -> Option<&Credential> {
        self.entries.get(site)
    }

    pub fn contains_site(&self, site: &str) -> bool {
        self.entries.contains_key(site)
    }

    /// Number of stored sites.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(site, credential)` pairs in site order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Credential> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Vault {
    type Item = (&'a String, &'a Credential);
    type IntoIter = btree_map::Iter<'a, String, Credential>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
