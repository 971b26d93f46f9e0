//! Keypad error types

use thiserror::Error;

/// Errors from keypad operations
#[derive(Error, Debug)]
pub enum KeypadError {
    /// Color string that cannot be converted to RGB channels
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Unrecognised animation effect name
    #[error("Unknown effect: {0:?}")]
    UnknownEffect(String),

    /// Unrecognised button type name
    #[error("Unknown button type: {0:?}")]
    UnknownButtonType(String),

    /// Profile file could not be read
    #[error("Failed to read profile {path}: {source}")]
    ProfileRead {
        path: String,
        source: std::io::Error,
    },

    /// Profile file is not valid TOML
    #[error("Failed to parse profile: {0}")]
    ProfileParse(#[from] toml::de::Error),
}
