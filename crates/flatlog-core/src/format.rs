//! Message formatting

use crate::level::Level;

/// Formatter function mapping a raw message and its level to the final
/// string written to every active transport.
///
/// The logger stores one of these in a public field, so the format can be
/// swapped at any time; replacements take effect on the next logging call.
pub type Formatter = Box<dyn Fn(&str, Level) -> String + Send + Sync>;

/// Default format: `<local timestamp> : [<LEVEL>] : <message>`
///
/// No trailing newline is appended, so the file transport stores entries
/// exactly as formatted.
pub fn default_formatter(message: &str, level: Level) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("{} : [{}] : {}", timestamp, level, message)
}
