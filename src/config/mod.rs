//! Artifact locations for a SecureNest installation.

pub mod settings;

pub use settings::Settings;
