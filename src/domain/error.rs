//! Error types for the Spellbook plugin.
//!
//! This module defines the centralized error type [`SpellbookError`] and a type alias
//! [`Result`] used throughout the plugin. All errors are implemented with the
//! `thiserror` crate.
//!
//! Errors fall into two classes. Recoverable errors (catalog, I/O, theme, worker,
//! configuration) are logged and surfaced as status text or dropped. Invariant
//! violations are fatal: the plugin shim aborts the frame instead of rendering data
//! it can no longer trust. Use [`SpellbookError::is_fatal`] to tell them apart.

use thiserror::Error;

/// The main error type for Spellbook plugin operations.
///
/// # Examples
///
/// ```
/// use spellbook::SpellbookError;
///
/// let err = SpellbookError::Catalog("missing field `name`".to_string());
/// assert!(!err.is_fatal());
///
/// let err = SpellbookError::Invariant("row 3 points past the catalog".to_string());
/// assert!(err.is_fatal());
/// ```
#[derive(Debug, Error)]
pub enum SpellbookError {
    /// The catalog file could not be parsed or has an unexpected shape.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Covers payload encoding/decoding across the IPC boundary and worker
    /// initialization problems.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An internal invariant was violated.
    ///
    /// Raised when a visible row refers to a catalog index that does not exist.
    /// Continuing would show the wrong spell, so this error is fatal.
    #[error("Invariant violated: {0}")]
    Invariant(String),
}

impl SpellbookError {
    /// Returns `true` for errors that must abort the current frame.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Invariant(_))
    }
}

/// A specialized `Result` type for Spellbook operations.
pub type Result<T> = std::result::Result<T, SpellbookError>;
