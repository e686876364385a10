//! The logger: option resolution, file initialization, transport dispatch

use std::path::Path;

use crate::config::{LoggerConfig, LoggerOptions, Transport};
use crate::console::StandardConsole;
use crate::error::Result;
use crate::format::{default_formatter, Formatter};
use crate::fs::OsFileStore;
use crate::level::Level;
use crate::sink::{ConsoleSink, FileStore};

/// Synchronous logger dispatching formatted entries to the configured
/// transports.
///
/// Every logging call formats the message once and writes that exact
/// string to each active transport before returning; there is no
/// buffering, no background work and no teardown state.
///
/// # Example
///
/// ```no_run
/// use flatlog_core::{Logger, LoggerOptions, Transport};
///
/// let logger = Logger::new(LoggerOptions::new().transports([Transport::Console]))?;
/// logger.info("service started")?;
/// # Ok::<(), flatlog_core::Error>(())
/// ```
pub struct Logger {
    config: LoggerConfig,
    console: Box<dyn ConsoleSink>,
    store: Box<dyn FileStore>,
    /// Formatter invoked exactly once per logging call; the same output
    /// is written to every active transport. Freely replaceable, taking
    /// effect on the next call. No validation is applied.
    pub formatter: Formatter,
}

impl Logger {
    /// Build a logger over the process console and the local filesystem.
    ///
    /// Resolves `options` against the defaults and, when the file
    /// transport is active, checks once whether the resolved file exists,
    /// creating it empty when it does not. Creation failure (missing
    /// parent directory, permissions) fails construction; no partial
    /// logger is returned.
    pub fn new(options: LoggerOptions) -> Result<Self> {
        Self::with_sinks(
            options,
            Box::new(StandardConsole::new()),
            Box::new(OsFileStore::new()),
        )
    }

    /// Build a logger over caller-supplied sinks.
    ///
    /// Identical semantics to [`Logger::new`]; the seam exists so tests
    /// and embedders can substitute their own console and file store.
    pub fn with_sinks(
        options: LoggerOptions,
        console: Box<dyn ConsoleSink>,
        store: Box<dyn FileStore>,
    ) -> Result<Self> {
        let config = LoggerConfig::resolve(options)?;
        if config.has(Transport::File) && !store.exists(&config.file_path) {
            store.create(&config.file_path)?;
        }
        Ok(Self {
            config,
            console,
            store,
            formatter: Box::new(default_formatter),
        })
    }

    /// Resolved log file path, regardless of which transports are active
    pub fn log_file_path(&self) -> &Path {
        &self.config.file_path
    }

    /// Resolved configuration
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Log an info entry
    pub fn info(&self, message: &str) -> Result<()> {
        self.dispatch(message, Level::Info)
    }

    /// Log a warning entry
    pub fn warn(&self, message: &str) -> Result<()> {
        self.dispatch(message, Level::Warn)
    }

    /// Log an error entry
    pub fn error(&self, message: &str) -> Result<()> {
        self.dispatch(message, Level::Error)
    }

    fn dispatch(&self, message: &str, level: Level) -> Result<()> {
        // Format once; every transport receives the identical string.
        let formatted = (self.formatter)(message, level);
        if self.config.has(Transport::Console) {
            self.console.write_line(level, &formatted)?;
        }
        if self.config.has(Transport::File) {
            self.store.append(&self.config.file_path, &formatted)?;
        }
        Ok(())
    }
}
