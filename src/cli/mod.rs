//! CLI module: interactive session, prompts, and output helpers.
//!
//! The session is the only place that touches the terminal: it opens the
//! store, makes sure the salt exists, asks for the master password once,
//! and then runs the add / list / exit menu until the user leaves.

pub mod commands;
pub mod output;

use clap::Parser;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::config::Settings;
use crate::crypto::{derive_key, DerivedKey, SaltStore};
use crate::errors::{Result, SecureNestError};
use crate::vault::{Vault, VaultStore};

/// SecureNest: local encrypted password vault.
///
/// Takes no arguments. Run it in the directory holding `vault.enc` and
/// `salt.salt` (both are created on first use).
#[derive(Parser)]
#[command(
    name = "securenest",
    about = "Local encrypted password vault",
    long_about = None,
    version
)]
pub struct Cli {}

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Parse the user's answer to "Choose an option (1/2/3)".
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::Add,
            "2" => Self::List,
            "3" => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

/// Run one interactive session against the artifacts in `settings`.
pub fn run(settings: &Settings) -> Result<()> {
    output::banner();

    let store = VaultStore::open(settings)?;

    let salt_store = SaltStore::new(&settings.salt_path);
    salt_store.ensure_salt()?;
    let salt = salt_store.read_salt()?;

    let first_run = !store.exists();
    let password = prompt_master_password(first_run)?;
    let (key, mut vault) = unlock(&store, password.as_bytes(), &salt)?;
    drop(password);

    if first_run {
        output::info("No vault found. A new one is created on your first save.");
    } else {
        output::success(&format!("Vault unlocked ({} site(s))", vault.len()));
    }

    loop {
        output::print_menu();
        let answer = prompt_text("Choose an option (1/2/3)", true)?;

        match MenuChoice::parse(&answer) {
            MenuChoice::Add => match commands::add::execute(&store, &key, &mut vault) {
                Ok(()) => {}
                Err(e) if is_recoverable(&e) => output::error(&e.to_string()),
                Err(e) => return Err(e),
            },
            MenuChoice::List => commands::list::execute(&vault),
            MenuChoice::Exit => {
                println!();
                output::info("Goodbye!");
                debug!("session closed");
                return Ok(());
            }
            MenuChoice::Invalid => output::warning("Invalid option. Try again!"),
        }
    }
}

/// Derive the key and decrypt the vault.
///
/// A wrong password surfaces as `AuthenticationFailure` and ends the
/// session; it never degrades into an empty vault.
pub fn unlock(store: &VaultStore, password: &[u8], salt: &[u8]) -> Result<(DerivedKey, Vault)> {
    let key = derive_key(password, salt)?;
    let vault = store.load(&key)?;
    Ok((key, vault))
}

/// Errors after which the menu keeps running.
///
/// Nothing was persisted and the in-memory vault is unchanged, so the user
/// may simply try the action again.
pub fn is_recoverable(err: &SecureNestError) -> bool {
    matches!(
        err,
        SecureNestError::Io(_) | SecureNestError::InvalidInput(_)
    )
}

/// Ask for the master password without echoing it.
///
/// On first run (no vault yet) the password must be typed twice, so a typo
/// cannot seal a new vault under an unknown password.  No verifier is ever
/// stored: an existing vault is opened with a single prompt.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_master_password(first_run: bool) -> Result<Zeroizing<String>> {
    let mut prompt = dialoguer::Password::new().with_prompt("Enter master password");
    if first_run {
        prompt = prompt.with_confirmation(
            "Confirm master password",
            "Passwords do not match, try again",
        );
    }

    let pw = prompt
        .interact()
        .map_err(|e| SecureNestError::PromptFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Read one line of visible input, trimmed.
pub fn prompt_text(prompt: &str, allow_empty: bool) -> Result<String> {
    let mut value: String = dialoguer::Input::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(|e| SecureNestError::PromptFailed(format!("input prompt: {e}")))?;
    let trimmed = value.trim().to_string();
    value.zeroize();
    Ok(trimmed)
}

/// Read one line of hidden input.  An empty answer is accepted.
pub fn prompt_secret(prompt: &str) -> Result<Zeroizing<String>> {
    let value = dialoguer::Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(|e| SecureNestError::PromptFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(value))
}

/// Validate a site name entered at the add prompt.
///
/// Must be non-empty, at most 256 characters, and free of control
/// characters (they would garble the listing table).
pub fn validate_site(site: &str) -> Result<()> {
    if site.trim().is_empty() {
        return Err(SecureNestError::InvalidInput(
            "site name cannot be empty".into(),
        ));
    }

    if site.chars().count() > 256 {
        return Err(SecureNestError::InvalidInput(
            "site name cannot exceed 256 characters".into(),
        ));
    }

    if site.chars().any(char::is_control) {
        return Err(SecureNestError::InvalidInput(format!(
            "site name '{}' contains control characters",
            site.escape_debug()
        )));
    }

    Ok(())
}
