//! Logger configuration.
//!
//! Configuration is supplied at construction time and is immutable for the
//! lifetime of the [`Logger`](crate::Logger); there are no mutable
//! configuration fields to race on after startup.

use std::collections::HashMap;

use serde::Deserialize;

use crate::Error;
use crate::Result;
use crate::color::{LevelColor, default_colors};

/// Configuration accepted by [`Logger::new`](crate::Logger::new)
///
/// Every field has a default, so partial configurations deserialize cleanly:
///
/// ```
/// use linelog::LoggerConfig;
///
/// let config: LoggerConfig = serde_json::from_str(r#"{"colorize": false}"#).unwrap();
/// assert_eq!(config.loglevel, "info");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Fallback severity used when an unrecognized one is requested
    pub loglevel: String,

    /// Whether to wrap output in ANSI color codes
    pub colorize: bool,

    /// Recognized severities; the longest name sets the label pad width
    pub levels: Vec<String>,

    /// Color applied per severity; unmapped severities print unstyled
    pub colors: HashMap<String, LevelColor>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            loglevel: "info".to_string(),
            colorize: true,
            levels: vec![
                "info".to_string(),
                "warn".to_string(),
                "error".to_string(),
            ],
            colors: default_colors(),
        }
    }
}

impl LoggerConfig {
    /// Check the constructor invariants
    ///
    /// The level set must be non-empty and must contain the fallback
    /// severity, otherwise normalization of unrecognized severities would
    /// have nowhere to land.
    pub fn validate(&self) -> Result<()> {
        if self.levels.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one level must be configured".to_string(),
            ));
        }

        if !self.levels.contains(&self.loglevel) {
            return Err(Error::InvalidConfig(format!(
                "default level '{}' is not in the configured levels",
                self.loglevel
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::Color;

    #[test]
    fn test_default_config_is_valid() {
        let config = LoggerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.loglevel, "info");
        assert!(config.colorize);
        assert_eq!(config.levels, vec!["info", "warn", "error"]);
        assert_eq!(config.colors.len(), 3);
    }

    #[test]
    fn test_validate_rejects_empty_levels() {
        let config = LoggerConfig {
            levels: vec![],
            ..LoggerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_default_level() {
        let config = LoggerConfig {
            loglevel: "debug".to_string(),
            ..LoggerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("debug"));
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "loglevel": "notice",
            "colorize": false,
            "levels": ["notice", "alert"],
            "colors": {
                "notice": "cyan",
                "alert": "bright red"
            }
        }"#;

        let config: LoggerConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.loglevel, "notice");
        assert!(!config.colorize);
        assert_eq!(config.levels, vec!["notice", "alert"]);
        assert_eq!(
            config.colors.get("alert"),
            Some(&LevelColor(Color::BrightRed))
        );
    }

    #[test]
    fn test_deserialize_partial_config_uses_defaults() {
        let config: LoggerConfig = serde_json::from_str(r#"{"colorize": false}"#).unwrap();
        assert!(!config.colorize);
        assert_eq!(config.loglevel, "info");
        assert_eq!(config.levels, vec!["info", "warn", "error"]);
    }
}
