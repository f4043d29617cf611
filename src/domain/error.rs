//! Error types for the almostevery plugin.
//!
//! This module defines the centralized error type [`AlmostEveryError`] and a type
//! alias [`Result`] used throughout the crate. All errors are implemented with
//! `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for plugin operations.
///
/// Most of these never reach the user: theme and configuration problems fall
/// back to defaults, and only a data resource failure ends the session with an
/// error screen.
///
/// # Examples
///
/// ```ignore
/// use almostevery::AlmostEveryError;
///
/// fn validate_config() -> Result<(), AlmostEveryError> {
///     Err(AlmostEveryError::Config("row_height must be at least 1".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum AlmostEveryError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The domain list resource is missing or unreadable.
    ///
    /// Fatal for the session: the browser never initializes without its list.
    #[error("Failed to load domain list from {path}: {source}")]
    DataResource {
        /// Resolved path of the resource inside the plugin sandbox.
        path: PathBuf,
        /// Underlying read error.
        #[source]
        source: std::io::Error,
    },

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for plugin operations.
pub type Result<T> = std::result::Result<T, AlmostEveryError>;
