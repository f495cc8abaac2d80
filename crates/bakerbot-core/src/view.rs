//! Pure projection of session state into what the widget shows.

use serde::Serialize;

use crate::flow::FlowTable;
use crate::session::{ConversationMode, Message, SessionState};

/// What the input area at the bottom of the widget looks like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputArea {
    /// Buttons only; typing is still allowed but not prompted.
    Buttons,
    /// The current step waits for typed input.
    TextEntry { placeholder: String },
}

/// Render-ready snapshot of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatView {
    pub messages: Vec<Message>,
    /// Buttons under the latest assistant message; older buttons are inert.
    pub active_quick_replies: Vec<String>,
    pub input: InputArea,
    /// `(current step, total steps)`, 1-based, while ordering.
    pub progress: Option<(usize, usize)>,
    pub can_go_back: bool,
    pub completed: bool,
}

/// `render(state) -> view`; no side effects.
pub fn render(state: &SessionState, flow: &FlowTable) -> ChatView {
    let ordering = state.mode == ConversationMode::Ordering;
    let completed = ordering && flow.is_terminal(state.step_index);
    let current = if ordering { flow.get(state.step_index) } else { None };

    let input = match current {
        Some(step) if step.requires_free_text => InputArea::TextEntry {
            placeholder: "Type your answer...".to_string(),
        },
        _ => InputArea::Buttons,
    };

    let active_quick_replies = match state.messages.last() {
        Some(last) if last.from_assistant => last.quick_replies.clone(),
        _ => Vec::new(),
    };

    ChatView {
        messages: state.messages.clone(),
        active_quick_replies,
        input,
        progress: current.map(|_| (state.step_index + 1, flow.len())),
        can_go_back: ordering && !state.history.is_empty(),
        completed,
    }
}
