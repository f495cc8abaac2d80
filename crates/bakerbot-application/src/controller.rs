//! The order dialogue controller.
//!
//! Owns the session state and applies one customer action at a time:
//! control tokens first, then the intent router while browsing or the
//! current flow step while ordering. Every mutation is persisted.

use std::sync::Arc;

use bakerbot_core::config::BotConfig;
use bakerbot_core::flow::FlowTable;
use bakerbot_core::handoff::HandoffFormatter;
use bakerbot_core::intent::{self, Intent};
use bakerbot_core::responses::{self, Reply};
use bakerbot_core::session::{ControlToken, ConversationMode, SessionState, UserInput};
use bakerbot_core::view::{self, ChatView};
use bakerbot_infrastructure::{SessionOrigin, SessionPersistence};

use crate::outcome::{Notification, Outcome};
use crate::ports::{LinkOpener, PreviewSurface};

/// Host capabilities handed to the controller.
#[derive(Clone)]
pub struct HostPorts {
    pub links: Arc<dyn LinkOpener>,
    pub preview: Arc<dyn PreviewSurface>,
}

/// Single-user conversation controller.
pub struct OrderDialogueController {
    config: BotConfig,
    flow: FlowTable,
    handoff: HandoffFormatter,
    persistence: SessionPersistence,
    ports: HostPorts,
    state: SessionState,
    origin: SessionOrigin,
}

impl OrderDialogueController {
    /// Creates a controller with the standard flow, resuming any stored session.
    pub fn new(config: BotConfig, persistence: SessionPersistence, ports: HostPorts) -> Self {
        Self::with_flow(config, FlowTable::standard(), persistence, ports)
    }

    pub fn with_flow(
        config: BotConfig,
        flow: FlowTable,
        persistence: SessionPersistence,
        ports: HostPorts,
    ) -> Self {
        let loaded = persistence.load();
        tracing::info!(
            session_id = %loaded.state.session_id,
            origin = ?loaded.origin,
            "Order dialogue ready"
        );
        Self {
            handoff: HandoffFormatter::new(&config.handoff),
            config,
            flow,
            persistence,
            ports,
            state: loaded.state,
            origin: loaded.origin,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn flow(&self) -> &FlowTable {
        &self.flow
    }

    /// How the session was obtained at startup.
    pub fn origin(&self) -> &SessionOrigin {
        &self.origin
    }

    pub fn view(&self) -> ChatView {
        view::render(&self.state, &self.flow)
    }

    /// Widget opened. Greets when the transcript is empty.
    pub fn open(&mut self) -> Outcome {
        let mut outcome = Outcome::default();
        if self.state.messages.is_empty() {
            self.say(&mut outcome, responses::greeting(&self.config));
            self.persist();
        }
        outcome
    }

    /// Applies one customer action.
    pub fn handle(&mut self, input: UserInput) -> Outcome {
        let text = input.text().trim().to_string();
        if text.is_empty() {
            return Outcome::default();
        }

        if let Some(token) = ControlToken::parse(&text) {
            return self.control(token, &text);
        }

        match self.state.mode {
            ConversationMode::Ordering if !self.flow.is_terminal(self.state.step_index) => {
                self.answer(&text)
            }
            _ => self.browse(&text),
        }
    }

    pub fn select_quick_reply(&mut self, label: &str) -> Outcome {
        self.handle(UserInput::QuickReply(label.to_string()))
    }

    pub fn submit_text(&mut self, text: &str) -> Outcome {
        self.handle(UserInput::FreeText(text.to_string()))
    }

    /// Undoes the last forward transition. No-op on empty history.
    pub fn go_back(&mut self) -> Outcome {
        let mut outcome = Outcome::default();
        if self.state.mode != ConversationMode::Ordering || !self.state.rewind() {
            tracing::debug!("Go back ignored: nothing to undo");
            return outcome;
        }
        tracing::debug!(step = self.state.step_index, "Went back one step");
        outcome.transcript_rewritten = true;
        self.persist();
        outcome
    }

    /// Clears everything and greets afresh.
    pub fn restart(&mut self) -> Outcome {
        let mut outcome = Outcome {
            transcript_rewritten: true,
            ..Outcome::default()
        };
        self.state.clear();
        tracing::info!(session_id = %self.state.session_id, "Conversation restarted");
        self.say(&mut outcome, responses::greeting(&self.config));
        self.persist();
        outcome
    }

    // ============================================================================
    // Transitions
    // ============================================================================

    fn control(&mut self, token: ControlToken, text: &str) -> Outcome {
        match token {
            ControlToken::GoBack => self.go_back(),
            ControlToken::Restart => self.restart(),
            ControlToken::PreviewCake => self.preview(),
            ControlToken::StartOrdering => {
                let in_progress = self.state.mode == ConversationMode::Ordering
                    && !self.flow.is_terminal(self.state.step_index);
                if in_progress {
                    tracing::debug!("Already ordering, start request ignored");
                    return Outcome::default();
                }
                let mut outcome = Outcome::default();
                self.state.push_customer(text);
                self.start_ordering(&mut outcome);
                self.persist();
                outcome
            }
        }
    }

    fn browse(&mut self, text: &str) -> Outcome {
        let mut outcome = Outcome::default();
        self.state.push_customer(text);

        let intent = intent::route(text);
        tracing::debug!(?intent, "Routed free text");
        match intent {
            Some(Intent::StartOrder) => self.start_ordering(&mut outcome),
            Some(intent) => {
                let reply = responses::for_intent(intent, &self.config)
                    .unwrap_or_else(responses::fallback);
                self.say(&mut outcome, reply);
            }
            None => self.say(&mut outcome, responses::fallback()),
        }
        self.persist();
        outcome
    }

    fn start_ordering(&mut self, outcome: &mut Outcome) {
        self.state.mode = ConversationMode::Ordering;
        self.state.step_index = 0;
        self.state.answers = Default::default();
        self.state.history.clear();
        tracing::info!(session_id = %self.state.session_id, "Order flow started");
        self.prompt_current_step(outcome);
    }

    fn answer(&mut self, text: &str) -> Outcome {
        let mut outcome = Outcome::default();
        let Some(step) = self.flow.get(self.state.step_index).cloned() else {
            return outcome;
        };

        let value = match step.accept(text) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(step = step.key, error = %e, "Answer rejected");
                outcome.notify(Notification::error("Let's try that again", &e));
                return outcome;
            }
        };

        self.state.checkpoint();
        self.state.push_customer(text);
        self.state.advance(step.field, value);
        tracing::debug!(step = step.key, next = self.state.step_index, "Step answered");

        if self.flow.is_terminal(self.state.step_index) {
            self.complete(&mut outcome);
        } else {
            self.prompt_current_step(&mut outcome);
        }
        self.persist();
        outcome
    }

    fn prompt_current_step(&mut self, outcome: &mut Outcome) {
        let Some(step) = self.flow.get(self.state.step_index) else {
            return;
        };
        let mut replies = step.quick_reply_labels();
        if !self.state.history.is_empty() {
            replies.push(ControlToken::GoBack.label().to_string());
        }
        let reply = Reply::new(step.prompt, replies);
        self.say(outcome, reply);
    }

    fn complete(&mut self, outcome: &mut Outcome) {
        let handoff = match self.handoff.prepare(&self.state.answers) {
            Ok(handoff) => handoff,
            Err(e) => {
                tracing::warn!(error = %e, "Flow finished without a complete order");
                outcome.notify(Notification::error("We couldn't prepare your order", &e));
                return;
            }
        };

        self.say(outcome, Reply::new(handoff.summary.clone(), Vec::new()));

        match self.ports.links.open(&handoff.link) {
            Ok(()) => {
                tracing::info!(session_id = %self.state.session_id, "Order handed off");
                outcome.notify(Notification::info(
                    "Opening WhatsApp! 🎉",
                    "Your order details have been prepared. Complete your order on WhatsApp!",
                ));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not open handoff link");
                outcome.notify(Notification::error("Couldn't open WhatsApp", &e));
            }
        }

        self.say(
            outcome,
            Reply::new(
                "All set! 🎊 Finish your order in WhatsApp and we'll take it from there. \
                 Want to see your cake first, or start a new order?",
                vec![
                    ControlToken::PreviewCake.label().to_string(),
                    ControlToken::Restart.label().to_string(),
                    ControlToken::GoBack.label().to_string(),
                ],
            ),
        );
        outcome.handoff = Some(handoff);
    }

    fn preview(&mut self) -> Outcome {
        let mut outcome = Outcome::default();
        let Some(params) = self.state.answers.preview_params() else {
            outcome.notify(Notification::info(
                "Nothing to preview yet",
                "Pick a type, flavor and theme first.",
            ));
            return outcome;
        };

        match self.ports.preview.launch(&params) {
            Ok(()) => outcome.notify(Notification::info(
                "AR Mode Activated! 📱",
                "Point your camera where you'd like to place the cake",
            )),
            Err(e) => {
                tracing::debug!(error = %e, "Preview unavailable");
                outcome.notify(Notification::error("Camera Error 📷", &e));
            }
        }
        outcome
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    fn say(&mut self, outcome: &mut Outcome, reply: Reply) {
        self.state.push_assistant(reply.text, reply.quick_replies);
        if let Some(message) = self.state.messages.last() {
            outcome.assistant_messages.push(message.clone());
        }
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.state) {
            tracing::warn!(error = %e, "Failed to persist session");
        }
    }
}
