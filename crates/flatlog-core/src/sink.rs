//! Transport sink abstractions
//!
//! The logger depends on these narrow capabilities instead of global
//! console/filesystem access, so tests can substitute fakes without
//! patching ambient state.

use std::io;
use std::path::Path;

use crate::level::Level;

/// Console sink abstraction
///
/// Implementations:
/// - `StandardConsole`: writes to the process stdout/stderr
/// - in-memory fakes that record written lines for assertions
pub trait ConsoleSink: Send + Sync {
    /// Write one formatted entry to the stream matching `level`
    fn write_line(&self, level: Level, text: &str) -> io::Result<()>;
}

/// File store abstraction backing the file transport
///
/// Implementations:
/// - `OsFileStore`: operates on the local filesystem
/// - in-memory fakes that record appends for assertions
pub trait FileStore: Send + Sync {
    /// Whether a file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Create an empty file at `path`, truncating any existing content
    fn create(&self, path: &Path) -> io::Result<()>;

    /// Append `text` to the file at `path`
    ///
    /// Each call opens, appends and closes independently; no handle is
    /// kept across calls and no delimiter is added.
    fn append(&self, path: &Path, text: &str) -> io::Result<()>;
}
