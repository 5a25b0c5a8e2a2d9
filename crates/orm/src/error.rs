//! Error types for the split-date record layer
//!
//! Provides error handling for attribute casting, split-date configuration
//! and calendar arithmetic on composite dates.

use std::fmt;

/// Result type alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Error types for record attribute operations
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Split-date mapping is misconfigured (unknown field, empty key, ...)
    Configuration(String),
    /// A value could not be cast to the type an attribute requires
    Cast(String),
    /// Calendar arithmetic produced a date outside the representable range
    OutOfRange(String),
    /// Serialization/deserialization error
    Serialization(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            ModelError::Cast(msg) => write!(f, "Cast error: {}", msg),
            ModelError::OutOfRange(msg) => write!(f, "Date out of range: {}", msg),
            ModelError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ModelError {}

// Convert from serde_json errors
impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Serialization(err.to_string())
    }
}
