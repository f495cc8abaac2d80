//! Session domain module.
//!
//! - `answers`: order fields and collected answers (`OrderField`, `OrderAnswers`)
//! - `message`: transcript entries (`Message`)
//! - `mode`: browsing vs. ordering (`ConversationMode`)
//! - `history`: undo stack entries (`HistoryEntry`)
//! - `input`: customer actions and control tokens (`UserInput`, `ControlToken`)
//! - `model`: the aggregate (`SessionState`)

mod answers;
mod history;
mod input;
mod message;
mod mode;
mod model;

pub use answers::{OrderAnswers, OrderField, PreviewParams};
pub use history::HistoryEntry;
pub use input::{ControlToken, UserInput, label_key};
pub use message::{Message, message_id};
pub use mode::ConversationMode;
pub use model::SessionState;
