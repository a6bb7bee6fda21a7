//! Descriptor limits a caller may configure.
//!
//! The core reads no files and no environment. A caller that keeps its own
//! configuration deserializes a `LimitsConfig` from it (any serde format, or
//! TOML via `from_toml_str`) and hands the effective cap to `InventoryList` or
//! `limits::check_count_within`. The protocol version is never configured
//! here; it is negotiated per peer and passed to each codec call.

use serde::{Deserialize, Serialize};

use crate::limits::MAX_PER_MESSAGE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Descriptors accepted per message. Values above the protocol cap are
    /// clamped to it.
    pub max_per_message: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_per_message: MAX_PER_MESSAGE,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse limits: {0}")]
    ParseFailed(#[from] toml::de::Error),
}

impl LimitsConfig {
    /// Parse a TOML table such as `max_per_message = 1000`. Missing keys keep
    /// their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Per-message descriptor cap actually enforced.
    pub fn effective_max_per_message(&self) -> usize {
        self.max_per_message.min(MAX_PER_MESSAGE)
    }
}
