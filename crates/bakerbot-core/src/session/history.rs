//! Undo stack entries.

use serde::{Deserialize, Serialize};

use super::answers::OrderAnswers;

/// State captured right before a forward transition in the order flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub step_index: usize,
    pub answers_snapshot: OrderAnswers,
    /// Transcript length before the customer's answer was appended.
    pub transcript_len: usize,
}
