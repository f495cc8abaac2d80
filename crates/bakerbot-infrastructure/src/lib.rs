//! Infrastructure layer for Baker Bot: stores, persisted DTOs, config files.

pub mod config_service;
pub mod dto;
pub mod paths;
pub mod session_persistence;
pub mod storage;

pub use crate::session_persistence::{LoadedSession, SessionOrigin, SessionPersistence};
pub use crate::storage::{JsonFileStore, MemoryStore};
