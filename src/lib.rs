//! Leveled console logging with timestamps and colorized output.
//!
//! This library provides a small [`Logger`] that prefixes each message with
//! a UTC timestamp and a padded severity label, optionally wraps the label
//! and message in ANSI color codes, and writes the result to standard
//! output, one line per call:
//!
//! ```text
//! [2024-01-01T00:00:00.000Z]  WARN - disk low
//! ```
//!
//! # Example
//!
//! ```
//! let logger = linelog::default_logger();
//! logger.info("server started");
//! logger.warn("disk low");
//! logger.error("connection lost");
//! ```
//!
//! Severities outside the configured set are normalized to the default
//! rather than rejected, so a `log` call never fails:
//!
//! ```
//! let logger = linelog::default_logger();
//! // "debug" is not a recognized level; this logs at "info"
//! logger.log("debug", "cache miss");
//! ```

use std::error::Error as StdError;
use std::fmt;

pub mod bridge;
pub mod color;
pub mod config;
pub mod logger;

// Re-export key types
pub use color::LevelColor;
pub use config::LoggerConfig;
pub use logger::Logger;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    /// Rejected logger configuration
    InvalidConfig(String),
    /// Color name that does not match any terminal palette entry
    UnknownColor(String),
    /// A global logger has already been installed
    AlreadyInitialized,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::UnknownColor(name) => write!(f, "Unknown color name: {}", name),
            Error::AlreadyInitialized => write!(f, "A global logger is already installed"),
        }
    }
}

impl StdError for Error {}

/// Type alias for library results
pub type Result<T> = std::result::Result<T, Error>;

/// Factory function to create a logger with the default configuration
///
/// Recognized levels are `info`, `warn` and `error`, rendered in white,
/// yellow and red respectively, with `info` as the fallback severity and
/// colorization enabled.
pub fn default_logger() -> Logger {
    Logger::default()
}
