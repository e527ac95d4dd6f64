//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Platform name not recognized
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// Orientation name not recognized
    #[error("Unknown orientation: {0}")]
    UnknownOrientation(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
