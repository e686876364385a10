//! Logger error types

use thiserror::Error;

/// Errors that can occur while constructing a logger or writing an entry
#[derive(Debug, Error)]
pub enum Error {
    /// Current working directory could not be resolved
    #[error("failed to resolve current working directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// I/O error from a transport or from log file creation
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
