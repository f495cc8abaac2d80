//! Transcript message types.

use serde::{Deserialize, Serialize};

/// A single line of the visible transcript.
///
/// Messages are append-only; the only removal is "go back" truncating the tail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Timestamp-derived identifier, unique within a transcript.
    pub id: String,
    pub text: String,
    /// `true` for assistant messages, `false` for the customer.
    #[serde(rename = "isBot")]
    pub from_assistant: bool,
    /// Buttons offered under an assistant message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<String>,
}

impl Message {
    pub fn assistant(id: String, text: impl Into<String>, quick_replies: Vec<String>) -> Self {
        Self {
            id,
            text: text.into(),
            from_assistant: true,
            quick_replies,
        }
    }

    pub fn customer(id: String, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            from_assistant: false,
            quick_replies: Vec::new(),
        }
    }
}

/// Builds a message id from the current time and transcript position.
///
/// The position suffix keeps ids unique when two messages land in the same
/// millisecond.
pub fn message_id(position: usize) -> String {
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), position)
}
