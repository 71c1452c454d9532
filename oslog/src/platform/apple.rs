use std::ffi::CStr;
use std::hash::{Hash, Hasher};

use oslog_sys::{
    as_object, os_log_create, os_log_t, os_release, wrapped_get_default_log,
    wrapped_os_log_type_enabled, wrapped_os_log_with_type,
};

use crate::Level;

#[derive(Debug)]
pub(crate) struct RawLog {
    inner: os_log_t,
    /// Set for handles from `os_log_create`; the default log is never released.
    owned: bool,
}

// SAFETY: os_log objects are immutable once created and the os_log API is
// documented as safe to call from any thread.
unsafe impl Send for RawLog {}
unsafe impl Sync for RawLog {}

impl RawLog {
    pub(crate) fn global() -> Self {
        // SAFETY: returns the static OS_LOG_DEFAULT object.
        let inner = unsafe { wrapped_get_default_log() };
        Self {
            inner,
            owned: false,
        }
    }

    pub(crate) fn create(subsystem: &CStr, category: &CStr) -> Option<Self> {
        // SAFETY: both pointers are valid NUL-terminated strings for the
        // duration of the call; os_log_create copies what it needs.
        let inner = unsafe { os_log_create(subsystem.as_ptr(), category.as_ptr()) };
        if inner.is_null() {
            return None;
        }
        Some(Self { inner, owned: true })
    }

    pub(crate) fn is_enabled(&self, level: Level) -> bool {
        // SAFETY: self.inner is a live handle from the platform.
        unsafe { wrapped_os_log_type_enabled(self.inner, level.as_raw()) }
    }

    pub(crate) fn emit(&self, level: Level, message: &CStr) {
        // SAFETY: self.inner is a live handle and message is NUL-terminated.
        // The shim passes message as an argument to a fixed format.
        unsafe { wrapped_os_log_with_type(self.inner, level.as_raw(), message.as_ptr()) }
    }
}

impl Drop for RawLog {
    fn drop(&mut self) {
        if self.owned {
            // SAFETY: handle came from os_log_create and is released exactly once.
            unsafe { os_release(as_object(self.inner)) }
        }
    }
}

impl PartialEq for RawLog {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for RawLog {}

impl Hash for RawLog {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}
