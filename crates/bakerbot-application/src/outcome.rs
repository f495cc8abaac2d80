//! What a single customer action produced.

use bakerbot_core::error::BakerError;
use bakerbot_core::handoff::Handoff;
use bakerbot_core::session::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A dismissible toast; never part of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, err: &BakerError) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            description: err.notification_text(),
        }
    }
}

/// Result of one controller call.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    /// Assistant messages appended by this call, in order. Hosts may reveal
    /// them after a typing delay; they are already part of the state.
    pub assistant_messages: Vec<Message>,
    pub notifications: Vec<Notification>,
    /// Set when the order was handed off.
    pub handoff: Option<Handoff>,
    /// The transcript was truncated or cleared; hosts should redraw it.
    pub transcript_rewritten: bool,
}

impl Outcome {
    pub fn is_noop(&self) -> bool {
        self.assistant_messages.is_empty()
            && self.notifications.is_empty()
            && self.handoff.is_none()
            && !self.transcript_rewritten
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
