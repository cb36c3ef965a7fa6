// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                               STATUSLINE                                     ║
// ║                    Timestamped status lines for CLIs                         ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 PROJECT GOAL
// ---------------
// Print one-line status reports (progress, warnings, errors) with a local
// timestamp and optional application/caller context, in a layout stable enough
// for log scrapers to depend on:
//
//   2024-01-01 00:00:00> myapp: ERROR in 'flush': disk full
//
// 📦 HOW IT WORKS
// ---------------
// - Execution reports go to stdout and carry no label.
// - Warnings and errors go to stderr, labelled WARNING / ERROR.
// - Streams and clock are injected, so the same reporter writes to the
//   terminal, a file, or a test buffer.
//
// 📜 LICENSE: MIT
//
// ══════════════════════════════════════════════════════════════════════════════

pub mod constants;
pub mod status;
pub mod clock;
pub mod format;
pub mod reporter;
pub mod parse;
pub mod error;

pub use clock::{Clock, FixedClock, LocalClock};
pub use error::{ParseError, ReportError};
pub use format::Paint;
pub use parse::{parse_line, ParsedLine};
pub use reporter::{report, report_error, report_execution, report_warning, StatusReporter};
pub use status::{LineShape, StatusKind, StatusMessage, Stream};
