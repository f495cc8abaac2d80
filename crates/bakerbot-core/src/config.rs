//! Bot configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer; every field has a
//! default so an empty or missing file yields a working bot.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the order bot.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BotConfig {
    /// Business name used in the greeting.
    pub business_name: String,
    /// Display name of the assistant.
    pub bot_name: String,
    pub handoff: HandoffConfig,
    pub storage: StorageConfig,
    pub typing: TypingConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            business_name: "Aishu's Dunkin Delicacies".to_string(),
            bot_name: "Aishu's Baker Bot".to_string(),
            handoff: HandoffConfig::default(),
            storage: StorageConfig::default(),
            typing: TypingConfig::default(),
        }
    }
}

/// Where completed orders are sent.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HandoffConfig {
    /// Base URL of the messaging app's click-to-chat endpoint.
    pub messaging_base_url: String,
    /// Recipient identifier (international number without `+`).
    pub recipient_id: String,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            messaging_base_url: "https://wa.me".to_string(),
            recipient_id: "918015102020".to_string(),
        }
    }
}

/// Keys and schema version for the persisted session.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub state_key: String,
    pub version_key: String,
    /// Stored sessions tagged with any other version are discarded.
    pub schema_version: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_key: "chatbot-state".to_string(),
            version_key: "chatbot-version".to_string(),
            schema_version: crate::SCHEMA_VERSION.to_string(),
        }
    }
}

/// Cosmetic "typing..." delay before assistant messages appear.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TypingConfig {
    pub base_delay_ms: u64,
    /// Upper bound of random extra delay.
    pub jitter_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: 800,
            jitter_ms: 400,
        }
    }
}
