//! Configuration and statistics types for chronolist.
//!
//! The configuration is owned per list instance: each
//! [`ChronoList`](crate::ChronoList) carries its own copy, set at construction
//! and immutable afterwards, so two lists configured with different time
//! formats never interfere.

use chrono::format::{Item, StrftimeItems};
use serde::de::Error;
use serde::{Deserialize, Serialize};

/// List configuration.
///
/// The single knob is the strftime pattern used to parse the reconstruction
/// query's string input. It is easily serializable and loadable from JSON or
/// TOML.
///
/// # Example
///
/// ```rust
/// use chronolist::Config;
///
/// let config = Config::default();
/// assert_eq!(config.time_format, "%Y-%m-%d %H:%M:%S");
///
/// let config: Config = serde_json::from_str(
///     r#"{ "time_format": "%Y-%m-%dT%H:%M:%S" }"#,
/// ).unwrap();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// strftime pattern the reconstruction query parses its input against.
    #[serde(default = "Config::default_time_format")]
    pub time_format: String,
}

impl Config {
    fn default_time_format() -> String {
        "%Y-%m-%d %H:%M:%S".to_string()
    }

    /// Replace the time format used to parse reconstruction query input.
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_format.is_empty() {
            return Err("Time format must not be empty".to_string());
        }

        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(format!(
                "Time format '{}' contains an unrecognized specifier",
                self.time_format
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_format: Self::default_time_format(),
        }
    }
}

/// List statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListStats {
    /// Number of slots currently visible as list content
    pub live_count: usize,
    /// Number of retired slots retained for historical queries
    pub retired_count: usize,
    /// Total number of mutating operations performed
    pub operations_count: u64,
}

impl ListStats {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.time_format, "%Y-%m-%d %H:%M:%S");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default().with_time_format("%Y-%m-%dT%H:%M:%S");

        let json = config.to_json().unwrap();
        let deserialized = Config::from_json(&json).unwrap();

        assert_eq!(deserialized.time_format, "%Y-%m-%dT%H:%M:%S");
    }

    #[test]
    fn test_config_rejects_empty_format() {
        let config = Config::default().with_time_format("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_bad_specifier() {
        let config = Config::default().with_time_format("%Q-nonsense");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_json_validates() {
        assert!(Config::from_json(r#"{ "time_format": "" }"#).is_err());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_config_toml_roundtrip() {
        let config = Config::default();
        let toml_str = config.to_toml().unwrap();
        let deserialized = Config::from_toml(&toml_str).unwrap();
        assert_eq!(deserialized, config);
    }
}
