//! Flow step definition.

use serde::Serialize;

use super::validation::InputRule;
use crate::error::Result;
use crate::session::{OrderField, label_key};

/// One question of the order flow.
#[derive(Debug, Clone, Serialize)]
pub struct FlowStep {
    /// Stable step identifier
    pub key: &'static str,
    /// Question shown to the customer
    pub prompt: &'static str,
    /// Buttons offered under the prompt
    pub quick_replies: &'static [&'static str],
    /// Answer field, or `None` for a purely informational step
    pub field: Option<OrderField>,
    /// The step has no buttons and waits for typed input
    pub requires_free_text: bool,
    pub rule: Option<InputRule>,
}

impl FlowStep {
    /// A step answered by picking (or typing) one of `quick_replies`.
    pub const fn choice(
        key: &'static str,
        prompt: &'static str,
        quick_replies: &'static [&'static str],
        field: OrderField,
    ) -> Self {
        Self {
            key,
            prompt,
            quick_replies,
            field: Some(field),
            requires_free_text: false,
            rule: None,
        }
    }

    /// A step answered by typing.
    pub const fn free_text(key: &'static str, prompt: &'static str, field: OrderField) -> Self {
        Self {
            key,
            prompt,
            quick_replies: &[],
            field: Some(field),
            requires_free_text: true,
            rule: None,
        }
    }

    /// A step that only informs; any reply moves on.
    pub const fn info(
        key: &'static str,
        prompt: &'static str,
        quick_replies: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            prompt,
            quick_replies,
            field: None,
            requires_free_text: false,
            rule: None,
        }
    }

    pub const fn with_rule(mut self, rule: InputRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Turns customer input into the value to store.
    ///
    /// Input matching a quick reply is stored as that reply's canonical label;
    /// anything else is trimmed and passed through the step's rule.
    pub fn accept(&self, input: &str) -> Result<String> {
        let trimmed = input.trim();
        let key = label_key(trimmed);
        if let Some(label) = self
            .quick_replies
            .iter()
            .find(|label| !key.is_empty() && label_key(label) == key)
        {
            return Ok((*label).to_string());
        }

        match self.rule {
            Some(rule) => {
                let field = self.field.map(|f| f.as_ref().to_string());
                rule.apply(field.as_deref().unwrap_or(self.key), trimmed)
            }
            None => Ok(trimmed.to_string()),
        }
    }

    pub fn quick_reply_labels(&self) -> Vec<String> {
        self.quick_replies.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAVORS: &[&str] = &["🍫 Chocolate", "🍋 Lemon"];

    #[test]
    fn test_typed_text_matching_a_reply_is_canonicalized() {
        let step = FlowStep::choice("flavor", "Flavor?", FLAVORS, OrderField::Flavor);
        assert_eq!(step.accept("chocolate").unwrap(), "🍫 Chocolate");
        assert_eq!(step.accept("  Mango ").unwrap(), "Mango");
    }

    #[test]
    fn test_rule_applies_to_free_text() {
        let step = FlowStep::free_text("phone", "Phone?", OrderField::Phone)
            .with_rule(InputRule::MobileNumber);
        assert_eq!(step.accept("98765 43210").unwrap(), "9876543210");

        let err = step.accept("12345").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("phone"));
    }
}
