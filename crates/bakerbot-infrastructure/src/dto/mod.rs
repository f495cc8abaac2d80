//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs are the stored shape of domain data and are private to the
//! infrastructure layer.
//!
//! ## Schema versioning
//!
//! The schema version (`bakerbot_core::SCHEMA_VERSION`) is written under its
//! own key next to the record. There is no migration: a record stamped with any
//! other version is discarded.
//!
//! ### Session record history
//! - **1.0.0**: `messages`, `orderData`, `currentStep` (no mode, no delivery date)
//! - **2.0.0**: adds `mode`, `history`, `sessionId` and the `deliveryDate` field

mod session;

pub use session::SessionRecordV2;
