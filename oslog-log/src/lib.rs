//! `log` adapter for Apple's unified logging system
//!
//! This crate adapts [`log`](https://docs.rs/log) to `os_log`. `log` is a standard logging crate,
//! used widely across the ecosystem.
//!
//! Each `log` target becomes an `os_log` category under one subsystem, and each
//! category can carry its own level filter:
//!
//! ```no_run
//! use log::LevelFilter;
//! use oslog_log::OsLogger;
//!
//! OsLogger::new("com.example.app")
//!     .level_filter(LevelFilter::Debug)
//!     .category_level_filter("Database", LevelFilter::Warn)
//!     .init()
//!     .expect("no other logger is registered");
//!
//! log::info!(target: "Database", "not logged, Database only takes Warn and up");
//! log::warn!(target: "Database", "logged");
//! ```
//!
//! `log` levels map onto `os_log` levels as Trace→Debug, Debug→Info,
//! Info→Default, Warn→Error, Error→Fault.
//!
//! You are likely to be interested in the sibling crates:
//! * [`oslog`](https://crates.io/crates/oslog): Safe handles for `os_log`.

use log::{LevelFilter, SetLoggerError};
use thiserror::Error;

mod config;
mod logger;

pub use config::LoggerConfig;
pub use logger::OsLogger;

#[derive(Debug, Error)]
pub enum LogConfigError {
    #[error("Failed to initialize os_log logger: {cause}")]
    Init { cause: SetLoggerError },
}

/// Initializes the logging system with the specified log level and subsystem.
///
/// You **must** only call this function once.
pub fn configure_logging(
    level: LevelFilter,
    subsystem: impl Into<String>,
) -> Result<(), LogConfigError> {
    OsLogger::new(subsystem).level_filter(level).init()
}
