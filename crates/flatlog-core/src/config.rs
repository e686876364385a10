//! Logger configuration and resolution

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default log file name, resolved against the current working directory
pub const DEFAULT_LOG_FILE: &str = "log.log";

/// An output sink for formatted log entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Append to the resolved log file
    File,
    /// Write to the process console streams
    Console,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::File => "file",
            Transport::Console => "console",
        }
    }
}

/// Caller-facing logger options
///
/// Every field is optional; omitted fields fall back to defaults during
/// resolution. Deserializable so embedders can read the option set from
/// their own configuration files.
///
/// # Example
///
/// ```
/// use flatlog_core::{LoggerOptions, Transport};
///
/// let options = LoggerOptions::new()
///     .transports([Transport::Console])
///     .file("/var/log/app.log");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggerOptions {
    /// Active transports; `None` selects both file and console.
    /// An explicitly empty list is accepted as given and produces no output.
    #[serde(default)]
    pub transports: Option<Vec<Transport>>,

    /// Target log file; `None` selects `log.log` in the current working
    /// directory. Relative paths resolve against the working directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LoggerOptions {
    /// Create an empty option set; every field falls back to its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the active transports
    pub fn transports(mut self, transports: impl Into<Vec<Transport>>) -> Self {
        self.transports = Some(transports.into());
        self
    }

    /// Select the target log file
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }
}

/// Resolved configuration, immutable for the lifetime of a logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Active transports, taken verbatim from the options when supplied
    pub transports: Vec<Transport>,
    /// Absolute path of the log file
    pub file_path: PathBuf,
}

impl LoggerConfig {
    /// Apply defaults and resolve the file path to an absolute path
    ///
    /// Resolving the working directory can fail, which surfaces as
    /// [`Error::CurrentDir`].
    pub fn resolve(options: LoggerOptions) -> Result<Self> {
        let transports = options
            .transports
            .unwrap_or_else(|| vec![Transport::File, Transport::Console]);
        let file = options
            .file
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
        let file_path = if file.is_absolute() {
            file
        } else {
            env::current_dir().map_err(Error::CurrentDir)?.join(file)
        };
        Ok(Self {
            transports,
            file_path,
        })
    }

    /// Whether a transport is active
    pub fn has(&self, transport: Transport) -> bool {
        self.transports.contains(&transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_select_both_transports() {
        let config = LoggerConfig::resolve(LoggerOptions::new()).unwrap();
        assert_eq!(config.transports, vec![Transport::File, Transport::Console]);
    }

    #[test]
    fn test_default_path_is_cwd_log_log() {
        let config = LoggerConfig::resolve(LoggerOptions::new()).unwrap();
        let expected = env::current_dir().unwrap().join(DEFAULT_LOG_FILE);
        assert_eq!(config.file_path, expected);
    }

    #[test]
    fn test_relative_path_resolves_against_cwd() {
        let config =
            LoggerConfig::resolve(LoggerOptions::new().file("logs/app.log")).unwrap();
        let expected = env::current_dir().unwrap().join("logs/app.log");
        assert_eq!(config.file_path, expected);
    }

    #[test]
    fn test_absolute_path_kept_verbatim() {
        let config = LoggerConfig::resolve(LoggerOptions::new().file("/tmp/x.log")).unwrap();
        assert_eq!(config.file_path, PathBuf::from("/tmp/x.log"));
    }

    #[test]
    fn test_empty_transport_list_accepted() {
        let config = LoggerConfig::resolve(LoggerOptions::new().transports([])).unwrap();
        assert!(config.transports.is_empty());
        assert!(!config.has(Transport::File));
        assert!(!config.has(Transport::Console));
    }

    #[test]
    fn test_options_deserialize_from_json() {
        let options: LoggerOptions =
            serde_json::from_str(r#"{"transports":["console"],"file":"/tmp/app.log"}"#)
                .unwrap();
        assert_eq!(options.transports, Some(vec![Transport::Console]));
        assert_eq!(options.file, Some(PathBuf::from("/tmp/app.log")));

        let empty: LoggerOptions = serde_json::from_str("{}").unwrap();
        assert!(empty.transports.is_none());
        assert!(empty.file.is_none());
    }
}
