//! Customer input and control tokens.

/// Represents one customer action on the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// A quick-reply button was pressed; carries the button label.
    QuickReply(String),
    /// Text typed into the input box.
    FreeText(String),
}

impl UserInput {
    pub fn text(&self) -> &str {
        match self {
            UserInput::QuickReply(text) | UserInput::FreeText(text) => text,
        }
    }
}

/// Labels that steer the conversation instead of answering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlToken {
    GoBack,
    Restart,
    StartOrdering,
    PreviewCake,
}

impl ControlToken {
    pub const GO_BACK_LABEL: &'static str = "⬅️ Go back";
    pub const RESTART_LABEL: &'static str = "🔄 Start over";
    pub const START_ORDERING_LABEL: &'static str = "🛒 Place Custom Order";
    pub const PREVIEW_LABEL: &'static str = "📸 Preview in AR";

    pub fn label(&self) -> &'static str {
        match self {
            ControlToken::GoBack => Self::GO_BACK_LABEL,
            ControlToken::Restart => Self::RESTART_LABEL,
            ControlToken::StartOrdering => Self::START_ORDERING_LABEL,
            ControlToken::PreviewCake => Self::PREVIEW_LABEL,
        }
    }

    /// Recognizes a control label regardless of emoji, case or spacing.
    pub fn parse(text: &str) -> Option<Self> {
        let key = label_key(text);
        [
            ControlToken::GoBack,
            ControlToken::Restart,
            ControlToken::StartOrdering,
            ControlToken::PreviewCake,
        ]
        .into_iter()
        .find(|token| label_key(token.label()) == key)
    }
}

/// Comparison key for quick-reply labels: lowercase alphanumeric words.
///
/// `"🍫 Chocolate"`, `"chocolate"` and `" CHOCOLATE! "` share one key.
pub fn label_key(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
