//! Common error types

/// An alias for Result<T, Error> for convenience.
pub type OsLogResult<T> = std::result::Result<T, Error>;

/// An error while working with a platform log handle.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The platform refused to create a log handle.
    #[error("Failed to create log handle for {subsystem}[{category}]")]
    CreateFailed {
        /// The requested subsystem
        subsystem: String,
        /// The requested category
        category: String,
    },
}
