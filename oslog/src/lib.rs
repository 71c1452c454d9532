#![deny(missing_docs)]

//! Safe handles for Apple's unified logging system
//!
//! This crate wraps `os_log` in a small, thread-safe API: fetch a log handle,
//! ask whether a level is enabled, and emit a message at a level.
//!
//! ```no_run
//! use oslog::{Level, OsLog};
//!
//! let log = OsLog::global();
//! if log.level_is_enabled(Level::Info) {
//!     log.info("hello");
//! }
//! ```
//!
//! Messages are always logged with the public string policy: they show up
//! unredacted, and they are never interpreted as format strings.
//!
//! On non-Apple targets the same API writes one line per message to stderr.
//!
//! You are likely to be interested in the sibling crates:
//! * [`oslog-log`](https://crates.io/crates/oslog-log): Standard `log` adapter.

mod error;
mod level;
mod minimal;
mod os_log_string;
mod platform;

pub use error::{Error, OsLogResult};
pub use level::Level;
pub use minimal::OsLog;
pub use os_log_string::OsLogString;
