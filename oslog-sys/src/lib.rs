//! Raw bindings for Apple's unified logging system
//!
//! This crate is an internal library for the `os_log` bindings.
//! It is not intended for use by end users, and may be materially changed at any time.
//!
//! `os_log` is a family of C macros, so it cannot be called across an FFI boundary
//! directly. A small C shim (`wrapper.c`) is compiled on Apple targets and exposes
//! three plain functions instead. The shim always logs the message through the
//! `%{public}s` format, so caller text is never parsed as a format string and is
//! never redacted.
//!
//! On non-Apple targets only the types and constants are available.
//!
//! You are likely to be interested in the sibling crates:
//! * [`oslog`](https://crates.io/crates/oslog): Safe handles for `os_log`.
//! * [`oslog-log`](https://crates.io/crates/oslog-log): Standard `log` adapter.

#![allow(non_camel_case_types)]

use std::ffi::c_void;
#[cfg(target_vendor = "apple")]
use std::ffi::c_char;

/// Opaque `os_log_s` object.
#[repr(C)]
pub struct os_log_s {
    _private: [u8; 0],
}

/// Platform log handle. Owned by the platform unless returned by `os_log_create`.
pub type os_log_t = *mut os_log_s;

/// Severity of a log entry.
pub type os_log_type_t = u8;

pub const OS_LOG_TYPE_DEFAULT: os_log_type_t = 0x00;
pub const OS_LOG_TYPE_INFO: os_log_type_t = 0x01;
pub const OS_LOG_TYPE_DEBUG: os_log_type_t = 0x02;
pub const OS_LOG_TYPE_ERROR: os_log_type_t = 0x10;
pub const OS_LOG_TYPE_FAULT: os_log_type_t = 0x11;

#[cfg(target_vendor = "apple")]
unsafe extern "C" {
    // wrapper.c
    pub fn wrapped_get_default_log() -> os_log_t;
    pub fn wrapped_os_log_type_enabled(log: os_log_t, level: os_log_type_t) -> bool;
    pub fn wrapped_os_log_with_type(log: os_log_t, level: os_log_type_t, message: *const c_char);

    // libSystem
    pub fn os_log_create(subsystem: *const c_char, category: *const c_char) -> os_log_t;
    pub fn os_release(object: *mut c_void);
}

/// Erases the handle type for `os_release`.
#[inline]
pub fn as_object(log: os_log_t) -> *mut c_void {
    log.cast::<c_void>()
}
