// ══════════════════════════════════════════════════════════════════════════════
// FORMAT MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Renders a status message into a single line. The layout is a fixed prefix
// (timestamp, then the optional application name) followed by one of four
// context segments picked from a 2x2 table: label present or not, caller
// present or not. That covers all eight templates without per-kind branches.
//
//   TS> [APP: ]LABEL in 'CALLER': MESSAGE
//   TS> [APP: ]LABEL: MESSAGE
//   TS> [APP: ]in 'CALLER': MESSAGE
//   TS> [APP: ]MESSAGE

use std::borrow::Cow;
use chrono::NaiveDateTime;
use colored::*;
use crate::constants::{CALLER_CLOSE, CALLER_OPEN, PROMPT, SEPARATOR, TIMESTAMP_FORMAT};
use crate::status::{StatusKind, StatusMessage};

/// Whether to decorate the timestamp and label with ANSI styling.
///
/// `Plain` is the wire format. `Colored` is meant for humans at a terminal and
/// degrades to plain text when `colored` decides not to colorize (`NO_COLOR`,
/// stdout not a terminal). `colored` never looks at stderr, so callers writing
/// warnings and errors should check that stream themselves before choosing
/// `Colored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Paint {
	#[default]
	Plain,
	Colored,
}

impl Paint {
	fn timestamp<'a>(self, timestamp: &'a str) -> Cow<'a, str> {
		match self {
			Paint::Plain => Cow::Borrowed(timestamp),
			Paint::Colored => Cow::Owned(timestamp.dimmed().to_string()),
		}
	}

	fn label(self, kind: StatusKind, label: &'static str) -> Cow<'static, str> {
		match (self, kind) {
			(Paint::Plain, _) | (Paint::Colored, StatusKind::Execution) => Cow::Borrowed(label),
			(Paint::Colored, StatusKind::Warning) => Cow::Owned(label.yellow().bold().to_string()),
			(Paint::Colored, StatusKind::Error) => Cow::Owned(label.red().bold().to_string()),
		}
	}
}

/// Formats a clock reading as `YYYY-MM-DD HH:MM:SS`.
pub fn timestamp(now: NaiveDateTime) -> String {
	now.format(TIMESTAMP_FORMAT).to_string()
}

/// Composes the full status line, trailing newline included.
pub fn render(timestamp: &str, message: &StatusMessage<'_>, paint: Paint) -> String {
	let mut line = String::with_capacity(
		timestamp.len()
			+ message.text.len()
			+ message.app_name.map_or(0, str::len)
			+ message.caller.map_or(0, str::len)
			+ 24,
	);

	line.push_str(&paint.timestamp(timestamp));
	line.push_str(PROMPT);

	if let Some(app_name) = message.app_name {
		line.push_str(app_name);
		line.push_str(SEPARATOR);
	}

	let label = message.kind.label().map(|l| paint.label(message.kind, l));
	match (label, message.caller) {
		(Some(label), Some(caller)) => {
			line.push_str(&label);
			line.push(' ');
			push_caller(&mut line, caller);
		}
		(Some(label), None) => {
			line.push_str(&label);
			line.push_str(SEPARATOR);
		}
		(None, Some(caller)) => push_caller(&mut line, caller),
		(None, None) => {}
	}

	line.push_str(message.text);
	line.push('\n');
	line
}

fn push_caller(line: &mut String, caller: &str) {
	line.push_str(CALLER_OPEN);
	line.push_str(caller);
	line.push_str(CALLER_CLOSE);
	line.push_str(SEPARATOR);
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;
	use crate::status::LineShape;

	const TS: &str = "2024-01-01 00:00:00";

	fn line(kind: StatusKind, text: &str, caller: Option<&str>, app_name: Option<&str>) -> String {
		render(TS, &StatusMessage::new(kind, text).caller(caller).app_name(app_name), Paint::Plain)
	}

	#[test]
	fn timestamp_is_zero_padded_24h() {
		let now = NaiveDate::from_ymd_opt(987, 3, 4)
			.and_then(|d| d.and_hms_opt(21, 5, 9))
			.unwrap();
		assert_eq!(timestamp(now), "0987-03-04 21:05:09");
	}

	#[test]
	fn execution_templates() {
		use StatusKind::Execution;
		assert_eq!(line(Execution, "msg", None, None), "2024-01-01 00:00:00> msg\n");
		assert_eq!(line(Execution, "msg", None, Some("app")), "2024-01-01 00:00:00> app: msg\n");
		assert_eq!(line(Execution, "msg", Some("fn"), None), "2024-01-01 00:00:00> in 'fn': msg\n");
		assert_eq!(line(Execution, "msg", Some("fn"), Some("app")), "2024-01-01 00:00:00> app: in 'fn': msg\n");
	}

	#[test]
	fn error_templates() {
		use StatusKind::Error;
		assert_eq!(line(Error, "msg", None, None), "2024-01-01 00:00:00> ERROR: msg\n");
		assert_eq!(line(Error, "msg", None, Some("app")), "2024-01-01 00:00:00> app: ERROR: msg\n");
		assert_eq!(line(Error, "msg", Some("fn"), None), "2024-01-01 00:00:00> ERROR in 'fn': msg\n");
		assert_eq!(line(Error, "msg", Some("fn"), Some("app")), "2024-01-01 00:00:00> app: ERROR in 'fn': msg\n");
	}

	#[test]
	fn warning_templates() {
		use StatusKind::Warning;
		assert_eq!(line(Warning, "msg", None, None), "2024-01-01 00:00:00> WARNING: msg\n");
		assert_eq!(line(Warning, "msg", None, Some("app")), "2024-01-01 00:00:00> app: WARNING: msg\n");
		assert_eq!(line(Warning, "msg", Some("fn"), None), "2024-01-01 00:00:00> WARNING in 'fn': msg\n");
		assert_eq!(line(Warning, "msg", Some("fn"), Some("app")), "2024-01-01 00:00:00> app: WARNING in 'fn': msg\n");
	}

	#[test]
	fn empty_message_keeps_trailing_separator() {
		assert_eq!(line(StatusKind::Execution, "", Some("init"), None), "2024-01-01 00:00:00> in 'init': \n");
		assert_eq!(line(StatusKind::Execution, "", None, None), "2024-01-01 00:00:00> \n");
	}

	#[test]
	fn every_line_has_exactly_one_newline() {
		for kind in StatusKind::ALL {
			for shape in LineShape::ALL {
				let caller = shape.caller.then_some("fn");
				let app_name = shape.app_name.then_some("app");
				let rendered = line(kind, "body", caller, app_name);
				assert_eq!(rendered.matches('\n').count(), 1, "{rendered:?}");
				assert!(rendered.ends_with("body\n"));
			}
		}
	}

	// Both overrides live in one test: `colored` keeps a single process-wide switch.
	#[test]
	fn colored_paint_styles_timestamp_and_label() {
		let ansi = regex::Regex::new(r"\x1b\[[0-9;]*m").unwrap();
		let error = StatusMessage::new(StatusKind::Error, "disk full").caller(Some("flush"));
		let warning = StatusMessage::new(StatusKind::Warning, "deprecated flag").app_name(Some("myapp"));
		let execution = StatusMessage::new(StatusKind::Execution, "build complete");

		colored::control::set_override(false);
		for msg in [error, warning, execution] {
			assert_eq!(render(TS, &msg, Paint::Colored), render(TS, &msg, Paint::Plain));
		}

		colored::control::set_override(true);
		let error_line = render(TS, &error, Paint::Colored);
		let warning_line = render(TS, &warning, Paint::Colored);
		let execution_line = render(TS, &execution, Paint::Colored);
		let dimmed = TS.dimmed().to_string();
		let red = "ERROR".red().bold().to_string();
		let yellow = "WARNING".yellow().bold().to_string();
		colored::control::unset_override();

		assert!(error_line.starts_with(&dimmed), "{error_line:?}");
		assert!(error_line.contains(&red), "{error_line:?}");
		assert!(!error_line.contains(&yellow));

		assert!(warning_line.contains(&yellow), "{warning_line:?}");
		assert!(!warning_line.contains(&red));

		// Only the timestamp is styled: one escape to open, one to reset.
		assert!(execution_line.starts_with(&dimmed), "{execution_line:?}");
		assert_eq!(ansi.find_iter(&execution_line).count(), 2, "{execution_line:?}");

		for (line, msg) in [(&error_line, error), (&warning_line, warning), (&execution_line, execution)] {
			assert_eq!(ansi.replace_all(line, ""), render(TS, &msg, Paint::Plain));
		}
	}
}
