use log::{LevelFilter, debug, error, info, trace, warn};
use oslog_log::{LogConfigError, OsLogger};

#[test]
fn test_basic_usage() {
    OsLogger::new("com.example.oslog")
        .level_filter(LevelFilter::Trace)
        .category_level_filter("Settings", LevelFilter::Warn)
        .category_level_filter("Database", LevelFilter::Error)
        .category_level_filter("Database", LevelFilter::Trace)
        .init()
        .unwrap();

    assert_eq!(log::max_level(), LevelFilter::Trace);

    // This will not be logged because of its category's custom level filter.
    info!(target: "Settings", "Info");

    warn!(target: "Settings", "Warn");
    error!(target: "Settings", "Error");

    trace!("Trace");
    debug!("Debug");
    info!("Info {}", 42);
    warn!(target: "Database", "Warn");
    error!("Error with %s and %n inside");
    info!("");

    let second = OsLogger::new("com.example.other").init();
    assert!(matches!(second, Err(LogConfigError::Init { .. })));
}
