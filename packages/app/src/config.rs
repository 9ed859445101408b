//! Runtime application configuration
//!
//! AppConfig is built once at startup from environment variables and is
//! immutable for the lifetime of the process. Unset variables fall back to
//! the store defaults; set but unparsable variables are an error.
//!
//! # Environment Variables
//!
//! - `NOTECRUD_MAX_TITLE_LENGTH`: Maximum title length in characters (default: 200)
//! - `NOTECRUD_MAX_CONTENT_LENGTH`: Maximum content length in characters (default: 10000)
//! - `NOTECRUD_EVENT_CAPACITY`: Change-event buffer size (default: 64)
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use notecrud_core::{ConfigError, NoteStoreConfig};

pub const MAX_TITLE_LENGTH_VAR: &str = "NOTECRUD_MAX_TITLE_LENGTH";
pub const MAX_CONTENT_LENGTH_VAR: &str = "NOTECRUD_MAX_CONTENT_LENGTH";
pub const EVENT_CAPACITY_VAR: &str = "NOTECRUD_EVENT_CAPACITY";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub store: NoteStoreConfig,
}

impl AppConfig {
    /// Build config from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut store = NoteStoreConfig::default();

        if let Some(value) = parse_var(&lookup, MAX_TITLE_LENGTH_VAR)? {
            store.max_title_length = value;
        }
        if let Some(value) = parse_var(&lookup, MAX_CONTENT_LENGTH_VAR)? {
            store.max_content_length = value;
        }
        if let Some(value) = parse_var(&lookup, EVENT_CAPACITY_VAR)? {
            store.event_capacity = value;
        }

        store.validate()?;
        Ok(Self { store })
    }
}

fn parse_var<F>(lookup: &F, key: &str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.store, NoteStoreConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (MAX_TITLE_LENGTH_VAR, "80"),
            (EVENT_CAPACITY_VAR, " 16 "),
        ]))
        .unwrap();

        assert_eq!(config.store.max_title_length, 80);
        assert_eq!(config.store.event_capacity, 16);
        assert_eq!(
            config.store.max_content_length,
            NoteStoreConfig::default().max_content_length
        );
    }

    #[test]
    fn test_unparsable_value() {
        let err =
            AppConfig::from_lookup(lookup_from(&[(MAX_CONTENT_LENGTH_VAR, "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: MAX_CONTENT_LENGTH_VAR.to_string(),
                value: "lots".to_string(),
            }
        );
    }

    #[test]
    fn test_zero_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(EVENT_CAPACITY_VAR, "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ZeroValue {
                field: "event_capacity"
            }
        );
    }
}
