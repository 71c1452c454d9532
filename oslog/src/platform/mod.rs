//! Per-platform log handles.
//!
//! Both backends expose the same `RawLog` surface: `global`, `create`,
//! `is_enabled` and `emit`.

#[cfg(target_vendor = "apple")]
mod apple;
#[cfg(target_vendor = "apple")]
pub(crate) use apple::RawLog;

#[cfg(not(target_vendor = "apple"))]
mod fallback;
#[cfg(not(target_vendor = "apple"))]
pub(crate) use fallback::RawLog;
