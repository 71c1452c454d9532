use std::borrow::Cow;
use std::sync::Arc;

use dashmap::DashMap;
use log::{LevelFilter, Log, Metadata, Record};
use oslog::{Level, OsLog};

use crate::{LogConfigError, LoggerConfig};

/// A [`Log`] implementation that writes to `os_log`.
///
/// Each record's target is used as the `os_log` category. Category logs are
/// created the first time a target is seen and kept for the logger's lifetime.
#[derive(Debug)]
pub struct OsLogger {
    subsystem: String,
    level: LevelFilter,
    categories: DashMap<String, Category>,
}

#[derive(Debug)]
struct Category {
    /// Overrides the logger-wide filter when set.
    filter: Option<LevelFilter>,
    log: Arc<OsLog>,
}

impl Category {
    fn new(subsystem: &str, category: &str, filter: Option<LevelFilter>) -> Self {
        // A category that the platform refuses still gets its messages, just
        // without the category attached.
        let log = OsLog::new(subsystem, category).unwrap_or_else(|_| OsLog::global());
        Self {
            filter,
            log: Arc::new(log),
        }
    }
}

impl Log for OsLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.filter_for(metadata.target()) {
            return false;
        }

        self.category_log(metadata.target())
            .level_is_enabled(Level::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Formatting may log again; no map guard is held while it runs.
        let message = match record.args().as_str() {
            Some(message) => Cow::Borrowed(message),
            None => Cow::Owned(record.args().to_string()),
        };
        self.category_log(record.target())
            .with_level(Level::from(record.level()), &message);
    }

    fn flush(&self) {}
}

impl OsLogger {
    /// Creates a new logger. You must also call `init` to finalize the set up.
    /// By default the level filter will be set to `LevelFilter::Trace`.
    pub fn new(subsystem: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            level: LevelFilter::Trace,
            categories: DashMap::new(),
        }
    }

    /// Creates a logger from deserialized settings. You must also call `init`.
    pub fn from_config(config: LoggerConfig) -> Self {
        config.categories.into_iter().fold(
            Self::new(config.subsystem).level_filter(config.level),
            |logger, (category, level)| logger.category_level_filter(&category, level),
        )
    }

    /// Only levels at or above `level` will be logged, except for categories
    /// with their own filter.
    pub fn level_filter(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Sets or updates the category's level filter.
    pub fn category_level_filter(self, category: &str, level: LevelFilter) -> Self {
        self.categories
            .entry(category.into())
            .and_modify(|existing| existing.filter = Some(level))
            .or_insert_with(|| Category::new(&self.subsystem, category, Some(level)));
        self
    }

    /// Registers this logger as the process-wide `log` logger.
    ///
    /// This can only succeed once per process.
    pub fn init(self) -> Result<(), LogConfigError> {
        let max_level = self.max_level();
        log::set_boxed_logger(Box::new(self)).map_err(|e| LogConfigError::Init { cause: e })?;
        log::set_max_level(max_level);
        Ok(())
    }

    /// The subsystem category logs are created under.
    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    /// The filter that applies to `target`.
    fn filter_for(&self, target: &str) -> LevelFilter {
        self.categories
            .get(target)
            .and_then(|category| category.filter)
            .unwrap_or(self.level)
    }

    /// The most verbose filter across the logger and all categories, so the
    /// `log` macros do not discard records a category would accept.
    fn max_level(&self) -> LevelFilter {
        self.categories
            .iter()
            .filter_map(|category| category.filter)
            .fold(self.level, std::cmp::max)
    }

    /// The log for `category`, created on first use. No map guard outlives this call.
    fn category_log(&self, category: &str) -> Arc<OsLog> {
        if let Some(existing) = self.categories.get(category) {
            return Arc::clone(&existing.log);
        }

        let created = Category::new(&self.subsystem, category, None);
        Arc::clone(
            &self
                .categories
                .entry(category.to_owned())
                .or_insert(created)
                .log,
        )
    }
}
