use std::collections::BTreeMap;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Serializable logger settings, for loading from a config file.
///
/// ```json
/// {
///     "subsystem": "com.example.app",
///     "level": "debug",
///     "categories": { "Database": "warn" }
/// }
/// ```
///
/// `level` defaults to `trace` and `categories` to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Subsystem every category log is created under, in reverse DNS form.
    pub subsystem: String,
    /// Filter for targets without their own entry in `categories`.
    #[serde(default = "default_level")]
    pub level: LevelFilter,
    /// Per-category filters, keyed by `log` target.
    #[serde(default)]
    pub categories: BTreeMap<String, LevelFilter>,
}

fn default_level() -> LevelFilter {
    LevelFilter::Trace
}

impl LoggerConfig {
    /// Settings for a subsystem, logging everything.
    pub fn new(subsystem: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            level: default_level(),
            categories: BTreeMap::new(),
        }
    }

    /// Sets the filter for targets without their own entry.
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Sets or replaces one category's filter.
    pub fn with_category(mut self, category: impl Into<String>, level: LevelFilter) -> Self {
        self.categories.insert(category.into(), level);
        self
    }
}
