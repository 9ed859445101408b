//! Configuration for the note store
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum title length, in characters
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

/// Default maximum content length, in characters
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 10_000;

/// Default buffer size of the change-event channel
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Errors raised while building or checking configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be greater than 0")]
    ZeroValue { field: &'static str },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Tunables for `NoteStore`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteStoreConfig {
    /// Maximum title length after trimming
    pub max_title_length: usize,

    /// Maximum content length after trimming
    pub max_content_length: usize,

    /// Number of change events buffered per subscriber before the oldest
    /// are dropped
    pub event_capacity: usize,
}

impl Default for NoteStoreConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl NoteStoreConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_title_length == 0 {
            return Err(ConfigError::ZeroValue {
                field: "max_title_length",
            });
        }

        if self.max_content_length == 0 {
            return Err(ConfigError::ZeroValue {
                field: "max_content_length",
            });
        }

        // tokio's broadcast channel panics on a zero capacity
        if self.event_capacity == 0 {
            return Err(ConfigError::ZeroValue {
                field: "event_capacity",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = NoteStoreConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_title_length, 200);
        assert_eq!(config.max_content_length, 10_000);
        assert_eq!(config.event_capacity, 64);
    }

    #[test]
    fn test_zero_values_are_rejected() {
        let config = NoteStoreConfig {
            max_content_length: 0,
            ..NoteStoreConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::ZeroValue {
                field: "max_content_length"
            }
        );

        let config = NoteStoreConfig {
            event_capacity: 0,
            ..NoteStoreConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "event_capacity must be greater than 0"
        );
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: NoteStoreConfig =
            serde_json::from_str(r#"{ "max_title_length": 80 }"#).unwrap();
        assert_eq!(config.max_title_length, 80);
        assert_eq!(config.max_content_length, DEFAULT_MAX_CONTENT_LENGTH);
        assert_eq!(config.event_capacity, DEFAULT_EVENT_CAPACITY);
    }
}
