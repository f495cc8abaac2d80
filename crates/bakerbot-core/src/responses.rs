//! Canned assistant replies for the browsing half of the conversation.

use crate::config::BotConfig;
use crate::intent::Intent;
use crate::session::ControlToken;

/// An assistant message before it is stamped into the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quick_replies: Vec<String>,
}

impl Reply {
    pub fn new(text: impl Into<String>, quick_replies: Vec<String>) -> Self {
        Self {
            text: text.into(),
            quick_replies,
        }
    }
}

pub const VIEW_MENU_LABEL: &str = "📋 View Menu";
pub const CONTACT_LABEL: &str = "📞 Contact Us";
pub const FAQ_LABEL: &str = "❓ FAQs";

/// Buttons offered whenever the customer is browsing.
pub fn browsing_suggestions() -> Vec<String> {
    [
        ControlToken::START_ORDERING_LABEL,
        VIEW_MENU_LABEL,
        CONTACT_LABEL,
        FAQ_LABEL,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn greeting(config: &BotConfig) -> Reply {
    Reply::new(
        format!(
            "Hi there! 🧁 Welcome to {}! I'm here to help you create your perfect custom order, \
             or answer questions about our menu. What would you like to do?",
            config.business_name
        ),
        browsing_suggestions(),
    )
}

/// Reply when the intent router finds nothing.
pub fn fallback() -> Reply {
    Reply::new(
        "Hmm, I'm not sure I understood that. 🤔 Here's what I can help with:\n\
         • Place a custom order\n\
         • Show the menu and prices\n\
         • Share our contact details and hours\n\
         • Answer questions about dietary options and delivery",
        browsing_suggestions(),
    )
}

/// Canned reply for an informational intent.
///
/// `Intent::StartOrder` has no canned reply: the controller starts the flow.
pub fn for_intent(intent: Intent, config: &BotConfig) -> Option<Reply> {
    let text = match intent {
        Intent::StartOrder => return None,
        Intent::Greeting => {
            return Some(Reply::new(
                format!(
                    "Hello! 👋 Welcome to {}. How can I sweeten your day?",
                    config.business_name
                ),
                browsing_suggestions(),
            ));
        }
        Intent::Thanks => "You're so welcome! 💕 Anything else I can help you with?".to_string(),
        Intent::Goodbye => {
            "Bye for now! 🧁 Come back whenever you're craving something sweet.".to_string()
        }
        Intent::Menu => MENU_TEXT.to_string(),
        Intent::Contact => CONTACT_TEXT.to_string(),
        Intent::Faq => FAQ_TEXT.to_string(),
    };
    Some(Reply::new(text, browsing_suggestions()))
}

const MENU_TEXT: &str = "Here's our menu 🍰\n\n\
🍪 Cookies: Chocolate Chip ₹150 • Oatmeal Raisin ₹160 • Double Chocolate ₹180 (100g)\n\
🟫 Brownies: Classic Fudge ₹200 • Walnut ₹250 • Salted Caramel ₹280 (4 pcs)\n\
🧁 Cupcakes: Vanilla Bean ₹300 • Red Velvet ₹350 • Lemon Blueberry ₹320 (6 pcs)\n\
🎂 Artisan Cakes: Birthday Celebration ₹800 (1kg) • Anniversary Special ₹1200 (1.5kg) • Custom Theme ₹1500 (2kg)\n\
🌱 Dietary: Eggless Wheat Brownies ₹220 • Sugar-Free Cookies ₹180 • Diabetic-Friendly Vanilla Cake ₹450 • \
Vegan Oat Cookies ₹170 • Gluten-Free Almond Brownies ₹280\n\n\
All prices are indicative. Custom orders and bulk discounts available!";

const CONTACT_TEXT: &str = "You can reach us here 📞\n\n\
📱 Phone / WhatsApp: +91 80151 02020\n\
✉️ Email: ashwarya99a@gmail.com\n\
🕘 Order hours: 9:00 AM - 8:00 PM (Daily)\n\
🚚 Home delivery within city limits, minimum order ₹200";

const FAQ_TEXT: &str = "Frequently asked questions ❓\n\n\
🥚 Eggless? Yes! Everything can be made eggless on request.\n\
🍯 Sugar-free or diabetic-friendly? Yes, ask for our sugar-free range.\n\
🌱 Vegan or gluten-free? We bake vegan oat cookies and gluten-free almond brownies.\n\
⏰ How much notice? Custom orders need 24-48 hours advance notice.\n\
🚚 Delivery? Home delivery within city limits, minimum order ₹200.";
