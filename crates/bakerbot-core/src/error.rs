//! Error types for Baker Bot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole bot.
///
/// Every variant is recoverable from the customer's point of view: the worst
/// outcome is retyping an answer or starting the conversation over.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BakerError {
    /// The customer typed something the active step does not accept.
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// The handoff was requested before every order field was answered.
    #[error("Order is incomplete, missing: {}", .missing.join(", "))]
    IncompleteOrder { missing: Vec<String> },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Key/value store error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A host capability (camera, browser) is not available.
    #[error("Capability unavailable: {0}")]
    Capability(String),
}

impl BakerError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Capability error
    pub fn capability(message: impl Into<String>) -> Self {
        Self::Capability(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Short, customer-facing text for a notification toast.
    pub fn notification_text(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Capability(message) => message.clone(),
            other => format!("Something went wrong: {}", other),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for BakerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for BakerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, BakerError>`.
pub type Result<T> = std::result::Result<T, BakerError>;
