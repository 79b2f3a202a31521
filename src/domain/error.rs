//! Error types for the archive plugin.
//!
//! [`ArchiveError`] is the single error type of the crate and [`Result`] the
//! matching alias. Variants are built with `thiserror`.

use thiserror::Error;

/// The main error type for archive operations.
///
/// # Examples
///
/// ```
/// use tie_archive::domain::ArchiveError;
///
/// let err = ArchiveError::DateParse {
///     filename: "Broken.pdf".to_string(),
///     reason: "expected at least 2 tokens".to_string(),
/// };
/// assert!(err.to_string().contains("Broken.pdf"));
/// ```
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// A manifest filename does not match any of the date layouts.
    ///
    /// Carries the offending filename and a description of the token that
    /// could not be read.
    #[error("cannot extract date from '{filename}': {reason}")]
    DateParse {
        /// Filename as it appears in the manifest.
        filename: String,
        /// What went wrong while reading the trailing tokens.
        reason: String,
    },

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;
