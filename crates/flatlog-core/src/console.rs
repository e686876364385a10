//! Console sink over the process standard streams

use std::io::{self, Write};

use crate::level::Level;
use crate::sink::ConsoleSink;

/// The real console sink
///
/// `Info` entries go to stdout, `Warn` and `Error` entries to stderr,
/// each terminated by the stream's line separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardConsole;

impl StandardConsole {
    /// Create a new console sink
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for StandardConsole {
    fn write_line(&self, level: Level, text: &str) -> io::Result<()> {
        match level {
            Level::Info => writeln!(io::stdout(), "{}", text),
            Level::Warn | Level::Error => writeln!(io::stderr(), "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_writes() {
        // This test just verifies the sink doesn't panic
        let console = StandardConsole::new();
        console.write_line(Level::Info, "info entry").unwrap();
        console.write_line(Level::Warn, "warn entry").unwrap();
        console.write_line(Level::Error, "error entry").unwrap();
    }
}
