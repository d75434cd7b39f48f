//! Defines application-specific error types.
//!
//! [`ReadError`] describes why a single source could not be read, and
//! [`Error`] is the top-level type returned by the library. Source failures are
//! always wrapped together with the label of the source that failed, so a user
//! can tell which of several files caused the aggregation to stop.

use std::io;
use thiserror::Error;

/// Why one source (a file or the standard input stream) could not be read.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The path could not be stat'ed. Missing files and other stat failures
    /// are reported the same way.
    #[error("file does not exist or can't be accessed")]
    NotFound,

    /// The path exists but is not a regular file.
    #[error("reading from directories is not currently supported")]
    IsDirectory,

    /// The owner-read permission bit is not set.
    #[error("permission denied")]
    PermissionDenied,

    /// Opening or reading the source failed after the readability check passed.
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Errors raised while writing to the clipboard sink.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The system clipboard could not be opened (no display server, feature
    /// disabled, ...).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard was opened but setting its content failed.
    #[error("failed to set clipboard content: {0}")]
    SetContent(String),
}

/// Errors raised while building a [`Config`](crate::config::Config).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option was given a value it cannot accept.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        /// The option name as shown to the user.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Top-level errors used throughout `clipper`.
#[derive(Error, Debug)]
pub enum Error {
    /// A single source failed; the whole aggregation is aborted.
    #[error("reading {label}: {source}")]
    Source {
        /// `file '<path>'` or `standard input`.
        label: String,
        /// The underlying reason.
        #[source]
        source: ReadError,
    },

    /// There was nothing to read: no text, no files, and stdin is a terminal.
    #[error("no input provided: pass text with -c, list files, or pipe data into standard input")]
    NoSourcesProvided,

    /// The clipboard sink rejected the final text.
    #[error("copying content to clipboard: {0}")]
    Clipboard(#[from] ClipboardError),

    /// The configuration was rejected before any source was read.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A specialized `Result` type for `clipper` operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the [`ReadError`] behind a source failure, if this is one.
    pub fn read_error(&self) -> Option<&ReadError> {
        match self {
            Error::Source { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Wraps a [`ReadError`] with the display label of the source it came from.
///
/// # Examples
/// ```
/// use clipper::errors::{source_error, ReadError};
///
/// let err = source_error(ReadError::NotFound, "file 'notes.txt'");
/// assert_eq!(
///     err.to_string(),
///     "reading file 'notes.txt': file does not exist or can't be accessed"
/// );
/// ```
pub fn source_error(source: ReadError, label: impl Into<String>) -> Error {
    Error::Source {
        label: label.into(),
        source,
    }
}
