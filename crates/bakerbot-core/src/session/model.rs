//! Session state aggregate.

use serde::{Deserialize, Serialize};

use super::answers::{OrderAnswers, OrderField};
use super::history::HistoryEntry;
use super::message::{Message, message_id};
use super::mode::ConversationMode;

/// Everything one customer's conversation consists of.
///
/// This is the pure domain model the controller mutates and the persistence
/// adapter snapshots; it knows nothing about storage or rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Unique session identifier (UUID format)
    pub session_id: String,
    pub mode: ConversationMode,
    /// Index into the flow table; equal to the flow length once completed.
    pub step_index: usize,
    pub answers: OrderAnswers,
    pub messages: Vec<Message>,
    pub history: Vec<HistoryEntry>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// An empty session: browsing, step 0, no answers, no transcript.
    pub fn new() -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            mode: ConversationMode::Browsing,
            step_index: 0,
            answers: OrderAnswers::new(),
            messages: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn is_fresh(&self) -> bool {
        self.messages.is_empty() && self.answers.is_empty() && self.step_index == 0
    }

    pub fn push_assistant(&mut self, text: impl Into<String>, quick_replies: Vec<String>) {
        let id = message_id(self.messages.len());
        self.messages.push(Message::assistant(id, text, quick_replies));
    }

    pub fn push_customer(&mut self, text: impl Into<String>) {
        let id = message_id(self.messages.len());
        self.messages.push(Message::customer(id, text));
    }

    /// Records the current position so the next transition can be undone.
    pub fn checkpoint(&mut self) {
        self.history.push(HistoryEntry {
            step_index: self.step_index,
            answers_snapshot: self.answers.clone(),
            transcript_len: self.messages.len(),
        });
    }

    /// Pops one history entry and rewinds to it.
    ///
    /// Returns `false` without touching anything when history is empty.
    pub fn rewind(&mut self) -> bool {
        let Some(entry) = self.history.pop() else {
            return false;
        };
        self.step_index = entry.step_index;
        self.answers = entry.answers_snapshot;
        self.messages.truncate(entry.transcript_len);
        true
    }

    /// Stores an answer and moves to the next step.
    pub fn advance(&mut self, field: Option<OrderField>, value: String) {
        if let Some(field) = field {
            self.answers.set(field, value);
        }
        self.step_index += 1;
    }

    /// Back to the initial empty condition, keeping the session id.
    pub fn clear(&mut self) {
        self.mode = ConversationMode::Browsing;
        self.step_index = 0;
        self.answers = OrderAnswers::new();
        self.messages.clear();
        self.history.clear();
    }

    /// Last assistant message, if any.
    pub fn last_assistant(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.from_assistant)
    }
}
