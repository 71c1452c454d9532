use std::fmt;

use oslog_sys::{
    OS_LOG_TYPE_DEBUG, OS_LOG_TYPE_DEFAULT, OS_LOG_TYPE_ERROR, OS_LOG_TYPE_FAULT, OS_LOG_TYPE_INFO,
    os_log_type_t,
};

/// Severity of a log entry, as understood by the platform.
///
/// The platform decides which levels are enabled and how long entries at each
/// level are kept. `Default` is the plain "log" level, not a lack of one.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Verbose diagnostics, usually disabled.
    Debug = OS_LOG_TYPE_DEBUG,
    /// Helpful but non-essential information.
    Info = OS_LOG_TYPE_INFO,
    /// The default log level.
    Default = OS_LOG_TYPE_DEFAULT,
    /// A process-level error.
    Error = OS_LOG_TYPE_ERROR,
    /// A system-level or multi-process error.
    Fault = OS_LOG_TYPE_FAULT,
}

impl Level {
    /// Every level, least severe first.
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Default,
        Level::Error,
        Level::Fault,
    ];

    /// The lower-case name of the level.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Default => "default",
            Level::Error => "error",
            Level::Fault => "fault",
        }
    }

    #[cfg_attr(not(target_vendor = "apple"), allow(dead_code))]
    pub(crate) fn as_raw(self) -> os_log_type_t {
        self as os_log_type_t
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "log")]
impl From<log::Level> for Level {
    fn from(value: log::Level) -> Self {
        match value {
            log::Level::Trace => Level::Debug,
            log::Level::Debug => Level::Info,
            log::Level::Info => Level::Default,
            log::Level::Warn => Level::Error,
            log::Level::Error => Level::Fault,
        }
    }
}
