//! Domain layer for Baker Bot.
//!
//! Holds the order flow definition, session model, intent router, handoff
//! formatting and the view projection. Nothing here touches storage, timers
//! or the terminal.

pub mod config;
pub mod error;
pub mod flow;
pub mod handoff;
pub mod intent;
pub mod responses;
pub mod session;
pub mod storage;
pub mod view;

// Re-export common error type
pub use error::{BakerError, Result};

/// Schema version stamped next to persisted sessions.
///
/// Bump on any change to the stored shape; older sessions are discarded.
pub const SCHEMA_VERSION: &str = "2.0.0";
