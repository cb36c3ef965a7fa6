// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Literal tokens of the status line layout. Anything parsing our output depends
// on these exact strings, so they live in one place.
// - TIMESTAMP_FORMAT: strftime pattern for the leading timestamp
// - PROMPT / SEPARATOR: the `> ` and `: ` delimiters
// - CALLER_OPEN / CALLER_CLOSE: quoting around the caller name

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Rendered timestamp width, e.g. `2024-01-01 00:00:00`.
pub const TIMESTAMP_LEN: usize = 19;

pub const PROMPT: &str = "> ";
pub const SEPARATOR: &str = ": ";

pub const CALLER_OPEN: &str = "in '";
pub const CALLER_CLOSE: &str = "'";
/// What a parser looks for to find the end of the caller name.
pub const CALLER_END: &str = "': ";

pub const ERROR_LABEL: &str = "ERROR";
pub const WARNING_LABEL: &str = "WARNING";
