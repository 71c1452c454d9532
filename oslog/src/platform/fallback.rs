use std::ffi::CStr;
use std::io::Write;

use time::format_description::well_known::Rfc3339;

use crate::Level;

/// Stand-in for a platform handle on hosts without `os_log`.
///
/// Every level is enabled and each entry becomes one line on stderr.
#[derive(Debug, PartialEq, Eq, Hash)]
pub(crate) struct RawLog {
    destination: Option<Destination>,
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct Destination {
    subsystem: String,
    category: String,
}

impl RawLog {
    pub(crate) fn global() -> Self {
        Self { destination: None }
    }

    pub(crate) fn create(subsystem: &CStr, category: &CStr) -> Option<Self> {
        Some(Self {
            destination: Some(Destination {
                subsystem: subsystem.to_string_lossy().into_owned(),
                category: category.to_string_lossy().into_owned(),
            }),
        })
    }

    pub(crate) fn is_enabled(&self, _level: Level) -> bool {
        true
    }

    pub(crate) fn emit(&self, level: Level, message: &CStr) {
        let line = self.render(level, &message.to_string_lossy());
        // Logging failures are silent.
        let _ = std::io::stderr().lock().write_all(line.as_bytes());
    }

    fn render(&self, level: Level, message: &str) -> String {
        let timestamp = time::OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or("<unknown>".to_string());
        let (subsystem, category) = match &self.destination {
            Some(destination) => (
                destination.subsystem.as_str(),
                destination.category.as_str(),
            ),
            None => ("default", "default"),
        };
        format!("{timestamp} {level} {subsystem}[{category}] {message}\n")
    }
}
