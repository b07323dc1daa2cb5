//! Console logger implementation.

use std::fmt::Display;

use chrono::{SecondsFormat, Utc};

use crate::Result;
use crate::config::LoggerConfig;

/// A simple logger that adds timestamps and supports multiple levels of
/// logging with colorized output
///
/// Each call writes exactly one newline-terminated line to standard output
/// in the form `[<timestamp>] <padded-level-label> - <message>`, where the
/// timestamp is UTC RFC 3339 with millisecond precision. Calls are
/// synchronous, unbuffered and never fail; there is no flush or close step.
///
/// Severity labels are right-aligned to the width of the longest configured
/// level name so messages line up in column output:
///
/// ```text
/// [2024-01-01T00:00:00.000Z]  INFO - server started
/// [2024-01-01T00:00:00.001Z] ERROR - connection lost
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    config: LoggerConfig,
    pad: usize,
}

impl Logger {
    /// Create a logger from the given configuration
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if the
    /// level set is empty or does not contain the default severity.
    pub fn new(config: LoggerConfig) -> Result<Logger> {
        config.validate()?;

        let pad = config
            .levels
            .iter()
            .map(|level| level.chars().count())
            .max()
            .unwrap_or(0);

        Ok(Logger { config, pad })
    }

    /// The configuration this logger was built with
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Log at the 'info' level
    pub fn info(&self, msg: impl Display) {
        self.log("info", msg);
    }

    /// Log at the 'warn' level
    pub fn warn(&self, msg: impl Display) {
        self.log("warn", msg);
    }

    /// Log at the 'error' level
    pub fn error(&self, msg: impl Display) {
        self.log("error", msg);
    }

    /// Log a message at a specific severity
    ///
    /// A severity outside the configured level set is silently replaced by
    /// the default, so this call accepts anything and never fails.
    pub fn log(&self, level: &str, msg: impl Display) {
        println!("{}", self.render(level, msg));
    }

    /// Format a log line without emitting it
    ///
    /// This is the pure formatting step behind [`log`](Logger::log): the
    /// returned line carries the timestamp captured at the moment of the
    /// call and no trailing newline.
    pub fn render(&self, level: &str, msg: impl Display) -> String {
        let level = self.normalize(level);
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let mut label = format!("{:>width$}", level.to_uppercase(), width = self.pad);
        let mut msg = msg.to_string();

        if self.config.colorize {
            if let Some(color) = self.config.colors.get(level) {
                msg = color.paint(&msg);
                label = color.paint(&label);
            }
        }

        format!("[{}] {} - {}", timestamp, label, msg)
    }

    /// Substitute the default severity for unrecognized ones
    fn normalize<'a>(&'a self, level: &'a str) -> &'a str {
        if self.config.levels.iter().any(|known| known == level) {
            level
        } else {
            &self.config.loglevel
        }
    }
}

impl Default for Logger {
    fn default() -> Logger {
        // The default configuration satisfies the constructor invariants
        Logger::new(LoggerConfig::default()).expect("default configuration is valid")
    }
}
