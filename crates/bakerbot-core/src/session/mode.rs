//! Conversation mode.

use serde::{Deserialize, Serialize};

/// Which half of the conversation the customer is in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationMode {
    /// Free Q&A: typed text goes through the intent router.
    #[default]
    Browsing,
    /// Walking the order flow: typed text answers the current step.
    Ordering,
}
