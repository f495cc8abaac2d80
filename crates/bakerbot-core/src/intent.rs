//! Keyword intent router for free text typed while browsing.
//!
//! Patterns are checked in a fixed precedence order and the first match wins.
//! Informational intents come first so a question that also mentions ordering
//! ("how much does a custom order cost?") gets answered; social intents come
//! last so "hi, what's on the menu?" is treated as a menu question.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// Coarse purpose of a typed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    Menu,
    Faq,
    Contact,
    StartOrder,
    Thanks,
    Goodbye,
    Greeting,
}

/// Ordered pattern table; position is precedence.
static PATTERNS: Lazy<Vec<(Intent, Regex)>> = Lazy::new(|| {
    [
        (
            Intent::Menu,
            r"\b(menu|prices?|pricing|costs?|rates?|how much|what do you (sell|have|offer|make))\b",
        ),
        (
            Intent::Faq,
            r"\b(faqs?|questions?|eggless|eggs?|vegan|vegetarian|sugar[- ]?free|diabetic|gluten|allerg\w*|diet\w*|healthy|notice|advance|how long|deliver\w*)\b",
        ),
        (
            Intent::Contact,
            r"\b(contact|phone|call|e-?mail|address|location|where|hours?|open|timings?|reach)\b",
        ),
        (
            Intent::StartOrder,
            r"\b(order\w*|custom|book|buy|purchase)\b",
        ),
        (Intent::Thanks, r"\b(thanks?|thank you|thx|ty)\b"),
        (Intent::Goodbye, r"\b(bye|goodbye|see you|cya|good night)\b"),
        (
            Intent::Greeting,
            r"\b(hi|hii+|hello|hey|hiya|namaste|good (morning|afternoon|evening))\b",
        ),
    ]
    .into_iter()
    .map(|(intent, pattern)| (intent, Regex::new(pattern).unwrap()))
    .collect()
});

/// Classifies `text`, or `None` when nothing matches.
///
/// Pure: the result depends only on `text`.
pub fn route(text: &str) -> Option<Intent> {
    let lowered = text.to_lowercase();
    PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&lowered))
        .map(|(intent, _)| *intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_each_intent() {
        assert_eq!(route("What's on the menu?"), Some(Intent::Menu));
        assert_eq!(route("how much for cupcakes"), Some(Intent::Menu));
        assert_eq!(route("Do you make eggless cakes?"), Some(Intent::Faq));
        assert_eq!(route("What are your hours"), Some(Intent::Contact));
        assert_eq!(route("I want to order a cake"), Some(Intent::StartOrder));
        assert_eq!(route("thank you so much"), Some(Intent::Thanks));
        assert_eq!(route("ok bye"), Some(Intent::Goodbye));
        assert_eq!(route("Hello!"), Some(Intent::Greeting));
    }

    #[test]
    fn test_quick_reply_labels_route() {
        assert_eq!(route("📋 View Menu"), Some(Intent::Menu));
        assert_eq!(route("📞 Contact Us"), Some(Intent::Contact));
        assert_eq!(route("❓ FAQs"), Some(Intent::Faq));
        assert_eq!(route("🛒 Place Custom Order"), Some(Intent::StartOrder));
    }

    #[test]
    fn test_precedence_on_overlap() {
        assert_eq!(route("what are your hours and menu"), Some(Intent::Menu));
        assert_eq!(route("hi, can I order something?"), Some(Intent::StartOrder));
        assert_eq!(route("hey, do you deliver?"), Some(Intent::Faq));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(route("purple elephants"), None);
        assert_eq!(route(""), None);
        // word boundaries: "this" must not look like "hi"
        assert_eq!(route("this"), None);
    }

    #[test]
    fn test_route_is_repeatable() {
        let first = route("what's on the menu?");
        let _ = route("bye");
        assert_eq!(route("what's on the menu?"), first);
    }
}
