//! Custom error types for InvestPro
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Per-field form problems are not errors:
//! they live in [`crate::registration::FieldErrors`].

use thiserror::Error;

/// The main error type for InvestPro operations
#[derive(Error, Debug)]
pub enum InvestError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors outside the registration wizard
    #[error("Validation error: {0}")]
    Validation(String),

    /// The account-creation collaborator refused or failed
    #[error("Account creation failed: {0}")]
    Account(String),

    /// A wizard action was invoked from a step that does not offer it
    #[error("'{action}' is not available on step {step}")]
    WrongStep { action: &'static str, step: u8 },

    /// Unknown value supplied for an enumerated option
    #[error("Unknown {kind}: '{value}'")]
    UnknownOption { kind: &'static str, value: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl InvestError {
    /// Create an "unknown option" error
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownOption {
            kind,
            value: value.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for InvestError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for InvestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for InvestError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for InvestPro operations
pub type InvestResult<T> = Result<T, InvestError>;
