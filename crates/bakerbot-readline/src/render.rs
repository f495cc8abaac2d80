//! Colored terminal rendering of the chat view.

use std::io::Write;

use colored::Colorize;

use bakerbot_application::{Notification, NotificationLevel};
use bakerbot_core::session::Message;
use bakerbot_core::view::{ChatView, InputArea};

pub fn message(message: &Message, bot_name: &str) {
    if message.from_assistant {
        println!("{}", format!("[{bot_name}]").bright_magenta());
        for line in message.text.lines() {
            println!("{}", line.bright_blue());
        }
    } else {
        println!("{}", format!("> {}", message.text).green());
    }
    println!();
}

pub fn notification(notification: &Notification) {
    let title = match notification.level {
        NotificationLevel::Info => notification.title.bright_green().bold(),
        NotificationLevel::Error => notification.title.red().bold(),
    };
    println!("{} {}", title, notification.description.bright_black());
}

/// Whole transcript, used after it was truncated or cleared.
pub fn transcript(view: &ChatView, bot_name: &str) {
    println!("{}", "─── conversation ───".bright_black());
    for m in &view.messages {
        message(m, bot_name);
    }
}

/// Numbered buttons, progress and input hint under the latest message.
pub fn controls(view: &ChatView) {
    if let Some((current, total)) = view.progress {
        println!("{}", format!("Step {current} of {total}").bright_black());
    }
    for (i, label) in view.active_quick_replies.iter().enumerate() {
        println!("  {} {}", format!("[{}]", i + 1).yellow(), label);
    }
    if let InputArea::TextEntry { placeholder } = &view.input {
        println!("{}", placeholder.bright_black());
    }
}

fn typing_line(bot_name: &str) -> String {
    format!("{bot_name} is typing...")
}

/// Blank line wide enough to cover the typing indicator.
fn typing_blank(bot_name: &str) -> String {
    " ".repeat(typing_line(bot_name).chars().count())
}

pub fn typing(active: bool, bot_name: &str) {
    if active {
        print!("{}\r", typing_line(bot_name).bright_black());
    } else {
        print!("{}\r", typing_blank(bot_name));
    }
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_blank_counts_characters() {
        assert_eq!(typing_blank("Bot").len(), "Bot is typing...".len());
        assert_eq!(typing_blank("Aishu's Café Bot 🧁").chars().count(), 31);
    }
}
