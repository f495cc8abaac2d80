//! The fixed order-intake flow.
//!
//! Steps are static data built once and cached; the controller only ever
//! moves one step forward or back.

mod step;
mod validation;

pub use step::FlowStep;
pub use validation::{InputRule, is_valid_phone, normalize_phone};

use std::sync::OnceLock;

use crate::session::OrderField;

/// Ordered, immutable list of flow steps.
#[derive(Debug, Clone)]
pub struct FlowTable {
    steps: Vec<FlowStep>,
}

impl FlowTable {
    pub fn new(steps: Vec<FlowStep>) -> Self {
        Self { steps }
    }

    /// The bakery's custom-order questionnaire.
    pub fn standard() -> Self {
        Self::new(standard_steps().to_vec())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FlowStep> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[FlowStep] {
        &self.steps
    }

    /// `true` once `index` is past the last step.
    pub fn is_terminal(&self, index: usize) -> bool {
        index >= self.steps.len()
    }
}

/// Static storage for the standard steps (initialized once).
static STANDARD_STEPS: OnceLock<Vec<FlowStep>> = OnceLock::new();

fn standard_steps() -> &'static [FlowStep] {
    STANDARD_STEPS.get_or_init(|| {
        vec![
            FlowStep::choice(
                "type",
                "Wonderful! Let's create your perfect custom order. 🧁 What would you like to order today?",
                &["🍰 Cake", "🧁 Cupcakes", "🥐 Pastries", "🍪 Cookies"],
                OrderField::Type,
            ),
            FlowStep::choice(
                "flavor",
                "Yummy choice! What flavor are you craving?",
                &[
                    "🍫 Chocolate",
                    "🍓 Strawberry",
                    "🍋 Lemon",
                    "🍦 Vanilla",
                    "✨ Surprise Me",
                ],
                OrderField::Flavor,
            ),
            FlowStep::choice(
                "occasion",
                "What's the special occasion?",
                &[
                    "🎂 Birthday",
                    "💍 Wedding",
                    "🎉 Anniversary",
                    "🎓 Graduation",
                    "💼 Corporate Event",
                    "🎈 Just Because",
                ],
                OrderField::Occasion,
            ),
            FlowStep::choice(
                "size",
                "How many people will be enjoying this treat?",
                &[
                    "👤 Small (1-5)",
                    "👥 Medium (6-15)",
                    "👨‍👩‍👧‍👦 Large (16-30)",
                    "🎪 Extra Large (30+)",
                ],
                OrderField::Size,
            ),
            FlowStep::choice(
                "theme",
                "Do you have a theme or special design in mind?",
                &[
                    "🌸 Floral",
                    "🎨 Colorful",
                    "✨ Elegant",
                    "🎪 Fun & Playful",
                    "💭 Tell me later",
                ],
                OrderField::Theme,
            ),
            FlowStep::choice(
                "budget",
                "What's your budget range?",
                &["💰 Under ₹1000", "💵 ₹1000-₹2000", "💳 ₹2000-₹5000", "💎 Above ₹5000"],
                OrderField::Budget,
            ),
            FlowStep::free_text(
                "name",
                "Great! I have all the details. What's your name?",
                OrderField::Name,
            ),
            FlowStep::free_text(
                "phone",
                "And your phone number so we can reach you?",
                OrderField::Phone,
            )
            .with_rule(InputRule::MobileNumber),
            FlowStep::choice(
                "deliveryDate",
                "When would you like it delivered? Custom orders need 24-48 hours notice, so pick a day or type a date.",
                &["📅 Tomorrow", "🗓️ This Weekend", "📆 Next Week"],
                OrderField::DeliveryDate,
            ),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_flow_covers_every_field_once() {
        let table = FlowTable::standard();
        let fields: Vec<_> = table.steps().iter().filter_map(|s| s.field).collect();
        let expected: Vec<_> = OrderField::all().collect();
        assert_eq!(fields, expected);
    }

    #[test]
    fn test_only_phone_is_validated() {
        let table = FlowTable::standard();
        let ruled: Vec<_> = table
            .steps()
            .iter()
            .filter(|s| s.rule.is_some())
            .map(|s| s.key)
            .collect();
        assert_eq!(ruled, vec!["phone"]);
    }

    #[test]
    fn test_free_text_steps_have_no_buttons() {
        for step in FlowTable::standard().steps() {
            if step.requires_free_text {
                assert!(step.quick_replies.is_empty(), "{}", step.key);
            }
        }
    }

    #[test]
    fn test_terminal_index() {
        let table = FlowTable::standard();
        assert!(!table.is_terminal(0));
        assert!(table.is_terminal(table.len()));
    }
}
