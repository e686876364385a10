//! Flatlog Core
//!
//! A minimal, fully synchronous logging utility: messages tagged with a
//! severity level are run through a replaceable formatter and written to
//! the console streams and/or a flat append-only file. Every call blocks
//! until all configured transports have been written; there is no
//! rotation, no buffering and no level filtering.
//!
//! ```no_run
//! use flatlog_core::{Logger, LoggerOptions};
//!
//! let mut logger = Logger::new(LoggerOptions::new())?;
//! logger.info("service started")?;
//!
//! // Swap the format for all subsequent calls
//! logger.formatter = Box::new(|message, level| format!("{level}: {message}\n"));
//! logger.warn("custom format from here on")?;
//! # Ok::<(), flatlog_core::Error>(())
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod format;
pub mod fs;
pub mod level;
pub mod logger;
pub mod sink;

// Re-export commonly used types
pub use config::{LoggerConfig, LoggerOptions, Transport, DEFAULT_LOG_FILE};
pub use console::StandardConsole;
pub use error::Error;
pub use format::{default_formatter, Formatter};
pub use fs::OsFileStore;
pub use level::Level;
pub use logger::Logger;
pub use sink::{ConsoleSink, FileStore};
