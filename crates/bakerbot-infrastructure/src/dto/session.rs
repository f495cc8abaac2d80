//! Persisted session record.
//!
//! Field names follow the widget's original local-storage layout
//! (`messages`, `orderData`, `currentStep`, `mode`).

use serde::{Deserialize, Serialize};

use bakerbot_core::session::{ConversationMode, HistoryEntry, Message, OrderAnswers, SessionState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecordV2 {
    #[serde(default)]
    pub session_id: Option<String>,
    pub messages: Vec<Message>,
    pub order_data: OrderAnswers,
    pub current_step: usize,
    pub mode: ConversationMode,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl From<&SessionState> for SessionRecordV2 {
    fn from(state: &SessionState) -> Self {
        Self {
            session_id: Some(state.session_id.clone()),
            messages: state.messages.clone(),
            order_data: state.answers.clone(),
            current_step: state.step_index,
            mode: state.mode,
            history: state.history.clone(),
        }
    }
}

impl SessionRecordV2 {
    pub fn into_domain(self) -> SessionState {
        let mut state = SessionState::new();
        if let Some(id) = self.session_id {
            state.session_id = id;
        }
        state.messages = self.messages;
        state.answers = self.order_data;
        state.step_index = self.current_step;
        state.mode = self.mode;
        state.history = self.history;
        state
    }
}
