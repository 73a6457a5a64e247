//! Error types for the powerpal_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for powerpal_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Profile failed validation before reaching the generators
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Built-in rule tables are inconsistent
    #[error("Rule book validation error: {0}")]
    RuleBook(String),

    /// An operation needed a stored profile and none exists
    #[error("No profile found. Run `powerpal setup` first.")]
    MissingProfile,

    /// Generic error
    #[error("{0}")]
    Other(String),
}
