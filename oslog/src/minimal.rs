use crate::platform::RawLog;
use crate::{Error, Level, OsLogResult, OsLogString};

/// A handle to a platform log.
///
/// The global handle is owned by the platform and lives for the whole process.
/// Handles made with [`OsLog::new`] are released when dropped.
///
/// Handles are cheap to query and safe to share between threads.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct OsLog {
    inner: RawLog,
}

impl Default for OsLog {
    fn default() -> Self {
        OsLog::global()
    }
}

impl OsLog {
    /// Creates a log for a subsystem and category, e.g. `("com.example.app", "network")`.
    ///
    /// A name containing an interior NUL is passed as the empty string.
    pub fn new<S, C>(subsystem: &S, category: &C) -> OsLogResult<Self>
    where
        S: OsLogString + ?Sized,
        C: OsLogString + ?Sized,
    {
        subsystem.with_cstr(|s| {
            category.with_cstr(|c| {
                RawLog::create(s, c)
                    .map(|inner| Self { inner })
                    .ok_or_else(|| Error::CreateFailed {
                        subsystem: s.to_string_lossy().into_owned(),
                        category: c.to_string_lossy().into_owned(),
                    })
            })
        })
    }

    /// The process's default log.
    #[inline]
    pub fn global() -> Self {
        Self {
            inner: RawLog::global(),
        }
    }

    /// Logs `message` at `level`.
    ///
    /// The message is logged as public data and is never interpreted as a format
    /// string. Nothing is reported if the platform drops it.
    #[inline]
    pub fn with_level<M: OsLogString + ?Sized>(&self, level: Level, message: &M) {
        message.with_cstr(|m| self.inner.emit(level, m))
    }

    /// Logs `message` at [`Level::Debug`].
    #[inline]
    pub fn debug<M: OsLogString + ?Sized>(&self, message: &M) {
        self.with_level(Level::Debug, message);
    }

    /// Logs `message` at [`Level::Info`].
    #[inline]
    pub fn info<M: OsLogString + ?Sized>(&self, message: &M) {
        self.with_level(Level::Info, message);
    }

    /// Logs `message` at [`Level::Default`].
    #[inline]
    pub fn default<M: OsLogString + ?Sized>(&self, message: &M) {
        self.with_level(Level::Default, message);
    }

    /// Logs `message` at [`Level::Error`].
    #[inline]
    pub fn error<M: OsLogString + ?Sized>(&self, message: &M) {
        self.with_level(Level::Error, message);
    }

    /// Logs `message` at [`Level::Fault`].
    #[inline]
    pub fn fault<M: OsLogString + ?Sized>(&self, message: &M) {
        self.with_level(Level::Fault, message);
    }

    /// Whether the platform currently records entries at `level` for this log.
    ///
    /// The answer follows the platform's configuration and can change while the
    /// process runs.
    #[inline]
    pub fn level_is_enabled(&self, level: Level) -> bool {
        self.inner.is_enabled(level)
    }
}
