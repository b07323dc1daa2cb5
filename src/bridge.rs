//! Adapter for the `log` facade.
//!
//! Applications that log through the `log` crate macros can route their
//! records to this crate's console format by installing a [`Logger`] as the
//! global backend:
//!
//! ```no_run
//! linelog::bridge::init(linelog::default_logger()).unwrap();
//! log::warn!("disk low");
//! ```
//!
//! Facade levels map by name: `Error`, `Warn` and `Info` hit the matching
//! severities, while `Debug` and `Trace` pass their lowercase names through
//! and normalize to the logger's default severity unless the level set has
//! been configured to include them.

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::{Error, Logger, Result};

struct Bridge {
    logger: Logger,
}

/// Severity name a facade level logs under
///
/// The facade reports uppercase names, the level set holds lowercase ones.
fn severity_name(level: Level) -> String {
    level.as_str().to_lowercase()
}

impl Log for Bridge {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // every severity is emitted; filtering is the facade's job
        true
    }

    fn log(&self, record: &Record) {
        self.logger.log(&severity_name(record.level()), record.args());
    }

    fn flush(&self) {
        // output is unbuffered
    }
}

/// Install `logger` as the global backend for the `log` macros
///
/// The facade's max level is raised to `Trace` so that no record is
/// filtered before it reaches the logger. Returns
/// [`Error::AlreadyInitialized`] if a global logger has already been set.
pub fn init(logger: Logger) -> Result<()> {
    log::set_boxed_logger(Box::new(Bridge { logger }))
        .map(|()| log::set_max_level(LevelFilter::Trace))
        .map_err(|_| Error::AlreadyInitialized)
}
