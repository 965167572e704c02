//! Error handling for screening sessions.

use std::io;

/// Errors that can occur while reading forms, scoring, or looking up guidance
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    /// A numeric measurement that could not be parsed or is not finite
    #[error("Invalid measurement for {field}: {value:?}")]
    InvalidMeasurement {
        /// Name of the offending form field
        field: &'static str,
        /// Raw value as it was supplied
        value: String,
    },

    /// Ward number that is not a non-negative integer
    #[error("Invalid ward number: {0:?}")]
    InvalidWard(String),

    /// A yes/no form field holding something else
    #[error("Invalid value for {field}: {value:?} (expected \"yes\" or \"no\")")]
    InvalidFlag {
        /// Name of the offending form field
        field: &'static str,
        /// Raw value as it was supplied
        value: String,
    },

    /// Category label outside the fixed enumeration
    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),

    /// Credential verification failed
    #[error("Access denied")]
    AccessDenied,

    /// Survey submitted before reaching the survey page
    #[error("Not logged in: survey submissions require the survey page")]
    NotLoggedIn,

    /// Error reading a forms file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding a forms file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for screening operations
pub type Result<T> = std::result::Result<T, ScreeningError>;
