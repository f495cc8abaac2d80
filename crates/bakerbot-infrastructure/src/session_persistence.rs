//! Versioned save/load of the conversation.
//!
//! The session record and the schema version live under two separate keys.
//! A record whose version does not match the current one is thrown away, never
//! migrated; an unreadable record is logged and treated as absent.

use std::sync::Arc;

use bakerbot_core::config::StorageConfig;
use bakerbot_core::error::Result;
use bakerbot_core::session::SessionState;
use bakerbot_core::storage::KeyValueStore;

use crate::dto::SessionRecordV2;

/// How a loaded session came to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOrigin {
    /// Nothing was stored.
    FirstRun,
    /// A matching record was restored.
    Resumed,
    /// A record existed but carried another schema version (or none).
    VersionMismatch { stored: Option<String> },
    /// A record existed but could not be read.
    Corrupt { reason: String },
}

#[derive(Debug, Clone)]
pub struct LoadedSession {
    pub state: SessionState,
    pub origin: SessionOrigin,
}

/// Persistence adapter over any [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionPersistence {
    store: Arc<dyn KeyValueStore>,
    config: StorageConfig,
}

impl SessionPersistence {
    pub fn new(store: Arc<dyn KeyValueStore>, config: StorageConfig) -> Self {
        Self { store, config }
    }

    /// Loads the stored session, falling back to a fresh one.
    ///
    /// Never fails: every problem ends in a first-run state.
    pub fn load(&self) -> LoadedSession {
        let raw = match self.store.get_item(&self.config.state_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return self.fresh(SessionOrigin::FirstRun),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored session, starting fresh");
                self.discard();
                return self.fresh(SessionOrigin::Corrupt {
                    reason: e.to_string(),
                });
            }
        };

        let stored_version = self
            .store
            .get_item(&self.config.version_key)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to read stored schema version");
                None
            });

        let version_ok = stored_version
            .as_deref()
            .is_some_and(|stored| versions_match(stored, &self.config.schema_version));
        if !version_ok {
            tracing::info!(
                stored = stored_version.as_deref().unwrap_or("<none>"),
                current = %self.config.schema_version,
                "Discarding session saved under another schema version"
            );
            self.discard();
            return self.fresh(SessionOrigin::VersionMismatch {
                stored: stored_version,
            });
        }

        match serde_json::from_str::<SessionRecordV2>(&raw) {
            Ok(record) => {
                let state = record.into_domain();
                tracing::debug!(
                    session_id = %state.session_id,
                    messages = state.messages.len(),
                    step = state.step_index,
                    "Resumed stored session"
                );
                LoadedSession {
                    state,
                    origin: SessionOrigin::Resumed,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored session is malformed, starting fresh");
                self.discard();
                self.fresh(SessionOrigin::Corrupt {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Writes the version tag and the record.
    pub fn save(&self, state: &SessionState) -> Result<()> {
        let json = serde_json::to_string(&SessionRecordV2::from(state))?;
        self.store
            .set_item(&self.config.version_key, &self.config.schema_version)?;
        self.store.set_item(&self.config.state_key, &json)?;
        Ok(())
    }

    /// Removes both keys.
    pub fn clear(&self) -> Result<()> {
        self.store.remove_item(&self.config.state_key)?;
        self.store.remove_item(&self.config.version_key)?;
        Ok(())
    }

    fn discard(&self) {
        if let Err(e) = self.clear() {
            tracing::warn!(error = %e, "Failed to discard stored session");
        }
    }

    fn fresh(&self, origin: SessionOrigin) -> LoadedSession {
        LoadedSession {
            state: SessionState::new(),
            origin,
        }
    }
}

/// Semver equality when both sides parse, exact text otherwise.
fn versions_match(stored: &str, current: &str) -> bool {
    match (
        semver::Version::parse(stored.trim()),
        semver::Version::parse(current.trim()),
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => stored.trim() == current.trim(),
    }
}
