//! Key/value store abstraction for persisted session data.

use crate::error::Result;

/// A string-keyed, string-valued store with local-storage semantics.
///
/// Implementations live in the infrastructure layer (in-memory, JSON file).
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
