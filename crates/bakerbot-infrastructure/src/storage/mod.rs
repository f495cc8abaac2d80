//! Key/value store implementations.

mod json_file;
mod memory;

pub use json_file::{JsonFileError, JsonFileStore};
pub use memory::MemoryStore;
