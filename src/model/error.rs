//! Error types for pagewin.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the CLI entry point
//!   - [`PaginationError`] - Rejected page-size configuration
//!   - [`InputError`] - Record file/stdin reading failures
//!   - [`ConfigError`](crate::config::ConfigError) - Config file loading failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//!
//! # Recovery Strategy
//!
//! The pagination engine has exactly one failure mode, [`PaginationError::InvalidConfiguration`].
//! Out-of-range pages and empty collections are normalized, never reported. A rejected page
//! size leaves the previous state untouched, so a view may simply ignore the request.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```
/// use pagewin::model::error::{AppError, PaginationError};
///
/// fn configure() -> Result<(), AppError> {
///     Err(PaginationError::InvalidConfiguration { value: 0 }.into())
/// }
///
/// assert!(matches!(configure(), Err(AppError::Pagination(_))));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Page state could not be created or updated.
    #[error("Pagination error: {0}")]
    Pagination(#[from] PaginationError),

    /// Failed to read records from file or stdin.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Configuration file exists but could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Writing output failed (broken pipe, closed stdout).
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors raised by the pagination engine.
///
/// Raised synchronously at state-creation time or when the page size changes,
/// never while slicing a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Items-per-page must be at least 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagewin::model::error::PaginationError;
    ///
    /// let err = PaginationError::InvalidConfiguration { value: 0 };
    /// assert!(err.to_string().contains("got 0"));
    /// ```
    #[error("Invalid configuration: items per page must be >= 1 (got {value})")]
    InvalidConfiguration {
        /// The rejected page size.
        value: i64,
    },
}

/// Errors encountered when reading records from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified record file does not exist.
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use pagewin::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound { path: PathBuf::from("/tmp/missing.json") };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// No file path was given and stdin is an interactive terminal.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Content is not a JSON array of objects nor JSON Lines of objects.
    #[error("Malformed record at line {line}: {reason}")]
    Malformed {
        /// 1-based line number of the offending record.
        line: usize,
        /// Parser or shape error details.
        reason: String,
    },

    /// Generic I/O error reading from the input source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
