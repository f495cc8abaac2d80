//! Application layer for Baker Bot.
//!
//! Coordinates the domain (flow, router, handoff) with persistence and the
//! host's capabilities to implement the order conversation use case.

pub mod controller;
pub mod outcome;
pub mod ports;
pub mod typing;

pub use controller::{HostPorts, OrderDialogueController};
pub use outcome::{Notification, NotificationLevel, Outcome};
pub use ports::{LinkOpener, NoCamera, PreviewSurface};
pub use typing::{Delivery, TypingDelay, TypingScheduler};
