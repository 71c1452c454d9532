use std::ffi::CString;
use std::sync::Arc;
use std::thread;

use oslog::{Level, OsLog, OsLogString};

fn assert_same_enablement(a: &OsLog, b: &OsLog) {
    for level in Level::ALL {
        assert_eq!(a.level_is_enabled(level), b.level_is_enabled(level), "{level}");
    }
}

#[test]
fn test_subsystem_interior_null() {
    let log = OsLog::new("com.example.oslog\0test", "category").unwrap();
    let empty = OsLog::new("", "category").unwrap();
    assert_same_enablement(&log, &empty);
    log.with_level(Level::Debug, "Hi");
}

#[test]
fn test_category_interior_null() {
    let log = OsLog::new("com.example.oslog", "category\0test").unwrap();
    let empty = OsLog::new("com.example.oslog", "").unwrap();
    assert_same_enablement(&log, &empty);
    log.with_level(Level::Debug, "Hi");
}

#[test]
fn test_message_interior_null() {
    assert!("Hi\0test".with_cstr(|c| c.is_empty()));
    let log = OsLog::new("com.example.oslog", "category").unwrap();
    log.with_level(Level::Debug, "Hi\0test");
}

#[test]
fn test_message_emoji() {
    let log = OsLog::new("com.example.oslog", "category").unwrap();
    log.with_level(Level::Debug, "\u{1F601}");
}

#[test]
fn test_message_empty() {
    OsLog::global().with_level(Level::Default, "");
}

#[test]
fn test_message_format_metacharacters() {
    let log = OsLog::global();
    for message in ["%s", "%n%n%n%n", "%{public}@", "%@ %d %x %p", "%%", "%{private}s"] {
        for level in Level::ALL {
            log.with_level(level, message);
        }
    }
}

#[test]
fn test_c_string_messages() {
    let log = OsLog::global();
    log.info(c"borrowed");
    log.info(&CString::new("owned").unwrap());
}

#[test]
fn test_global_log_with_level() {
    let log = OsLog::global();
    log.with_level(Level::Debug, "Debug");
    log.with_level(Level::Info, "Info");
    log.with_level(Level::Default, "Default");
    log.with_level(Level::Error, "Error");
    log.with_level(Level::Fault, "Fault");
}

#[test]
fn test_custom_log_with_level() {
    let log = OsLog::new("com.example.oslog", "testing").unwrap();
    log.debug("Debug");
    log.info("Info");
    log.default("Default");
    log.error("Error");
    log.fault("Fault");
}

#[test]
fn test_category_handles_are_equivalent() {
    let first = OsLog::new("com.example.oslog", "query").unwrap();
    let second = OsLog::new("com.example.oslog", "query").unwrap();
    assert_same_enablement(&first, &second);
}

#[test]
fn test_global_handles_are_equivalent() {
    let first = OsLog::global();
    let second = OsLog::global();
    assert_eq!(first, second);
    assert_same_enablement(&first, &second);
}

#[test]
fn test_dropping_handles() {
    for _ in 0..64 {
        let log = OsLog::new("com.example.oslog", "churn").unwrap();
        log.debug("churn");
    }
    drop(OsLog::global());
    OsLog::global().info("still alive");
}

#[test]
fn test_concurrent_emission() {
    let shared = Arc::new(OsLog::new("com.example.oslog", "threads").unwrap());
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let global = OsLog::global();
                for i in 0..50 {
                    shared.with_level(Level::Debug, &format!("worker {worker} entry {i}"));
                    global.with_level(Level::Info, &format!("worker {worker} global {i}"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
