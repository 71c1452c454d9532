use log::LevelFilter;
use oslog::{Level, OsLog};
use oslog_log::OsLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Direct handle use.
    let log = OsLog::global();
    for level in Level::ALL {
        println!("{level}: enabled = {}", log.level_is_enabled(level));
    }
    log.with_level(Level::Default, "hello from the default log");

    let network = OsLog::new("com.example.oslog", "network")?;
    network.error("connection reset");

    // Through the `log` facade.
    OsLogger::new("com.example.oslog")
        .level_filter(LevelFilter::Debug)
        .category_level_filter("Settings", LevelFilter::Warn)
        .init()?;

    log::info!(target: "Settings", "dropped by the Settings filter");
    log::warn!(target: "Settings", "kept");
    log::debug!("Debug goes to os_log's Info level");

    // Watch with: log stream --predicate 'subsystem == "com.example.oslog"' --level debug
    Ok(())
}
