//! Turns a completed order into a transcript summary and a messaging deep link.

use serde::Serialize;

use crate::config::HandoffConfig;
use crate::error::{BakerError, Result};
use crate::session::{OrderAnswers, OrderField};

/// Everything needed to finish an order outside the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Handoff {
    /// Multi-line summary appended to the transcript.
    pub summary: String,
    /// Plain text the link pre-fills in the messaging app.
    pub message: String,
    /// `https://<domain>/<recipient>?text=<percent-encoded message>`
    pub link: String,
}

/// Formats completed orders for a fixed recipient.
#[derive(Debug, Clone)]
pub struct HandoffFormatter {
    base_url: String,
    recipient_id: String,
}

impl HandoffFormatter {
    pub fn new(config: &HandoffConfig) -> Self {
        Self {
            base_url: config.messaging_base_url.trim_end_matches('/').to_string(),
            recipient_id: config.recipient_id.clone(),
        }
    }

    /// Builds the handoff; fails if any order field is unanswered.
    pub fn prepare(&self, answers: &OrderAnswers) -> Result<Handoff> {
        let missing = answers.missing();
        if !missing.is_empty() {
            return Err(BakerError::IncompleteOrder {
                missing: missing.iter().map(|f| f.as_ref().to_string()).collect(),
            });
        }

        let message = self.message_text(answers);
        let link = self.link_for(&message);
        tracing::debug!(length = message.len(), "Prepared handoff message");
        Ok(Handoff {
            summary: summary_text(answers),
            message,
            link,
        })
    }

    /// `Label: value` layout, customer details first.
    pub fn message_text(&self, answers: &OrderAnswers) -> String {
        let (customer, order): (Vec<OrderField>, Vec<OrderField>) =
            OrderField::all().partition(|f| f.is_customer_detail());

        let mut text = String::from("🧁 *Custom Order Request from Chatbot*\n\n");
        text.push_str("*Customer Details:*\n");
        for field in customer {
            text.push_str(&labelled_line(answers, field));
        }
        text.push_str("\n*Order Details:*\n");
        for field in order {
            text.push_str(&labelled_line(answers, field));
        }
        text.push_str("\nLooking forward to creating something special! 🎂✨");
        text
    }

    pub fn link_for(&self, message: &str) -> String {
        format!(
            "{}/{}?text={}",
            self.base_url,
            self.recipient_id,
            urlencoding::encode(message)
        )
    }
}

fn labelled_line(answers: &OrderAnswers, field: OrderField) -> String {
    format!("{}: {}\n", field.label(), answers.get(field).unwrap_or_default())
}

fn summary_icon(field: OrderField) -> &'static str {
    match field {
        OrderField::Type => "🎂",
        OrderField::Flavor => "🍰",
        OrderField::Occasion => "🎉",
        OrderField::Size => "📏",
        OrderField::Theme => "🎨",
        OrderField::Budget => "💰",
        OrderField::Name => "👤",
        OrderField::Phone => "📱",
        OrderField::DeliveryDate => "📅",
    }
}

/// Summary shown in the transcript: order details, then customer details.
pub fn summary_text(answers: &OrderAnswers) -> String {
    let mut text = String::from("Perfect! Here's your order summary:\n\n");
    let mut in_customer_block = false;
    for field in OrderField::all() {
        if field.is_customer_detail() && !in_customer_block {
            text.push('\n');
            in_customer_block = true;
        }
        text.push_str(&format!(
            "{} {}: {}\n",
            summary_icon(field),
            field.label(),
            answers.get(field).unwrap_or_default()
        ));
    }
    text.push_str("\nLet's send this to WhatsApp to finalize your order! 🎊");
    text
}
