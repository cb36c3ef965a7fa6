// ══════════════════════════════════════════════════════════════════════════════
// PARSE MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Reads a status line back into its parts. The caller states which template
// the line was rendered with (kind + shape); with that known, each token ends
// at the first occurrence of its terminator:
// - application name: `: LABEL` (or `: in '` / `: ` for execution lines)
// - caller: `': `
// Tokens that themselves contain their terminator cannot be recovered.

use chrono::NaiveDateTime;
use crate::constants::{CALLER_END, CALLER_OPEN, PROMPT, SEPARATOR, TIMESTAMP_FORMAT, TIMESTAMP_LEN};
use crate::error::ParseError;
use crate::status::{LineShape, StatusKind, StatusMessage};

/// Tokens recovered from one rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
	pub timestamp: NaiveDateTime,
	pub kind: StatusKind,
	pub app_name: Option<&'a str>,
	pub caller: Option<&'a str>,
	pub text: &'a str,
}

impl<'a> ParsedLine<'a> {
	pub fn label(&self) -> Option<&'static str> {
		self.kind.label()
	}

	pub fn message(&self) -> StatusMessage<'a> {
		StatusMessage::new(self.kind, self.text)
			.caller(self.caller)
			.app_name(self.app_name)
	}
}

/// Parses `line` as rendered for `kind` with the optional segments in `shape`.
/// A single trailing newline is accepted.
pub fn parse_line(kind: StatusKind, shape: LineShape, line: &str) -> Result<ParsedLine<'_>, ParseError> {
	let line = line.strip_suffix('\n').unwrap_or(line);

	if line.len() < TIMESTAMP_LEN || !line.is_char_boundary(TIMESTAMP_LEN) {
		return Err(ParseError::MissingTimestamp);
	}
	let (stamp, rest) = line.split_at(TIMESTAMP_LEN);
	let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
		.map_err(|e| ParseError::BadTimestamp(e.to_string()))?;
	let rest = expect(rest, PROMPT)?;

	let label = kind.label();

	let (app_name, rest) = if shape.app_name {
		let end = match (label, shape.caller) {
			(Some(label), _) => find_after_separator(rest, label),
			(None, true) => find_after_separator(rest, CALLER_OPEN),
			(None, false) => rest.find(SEPARATOR),
		}
		.ok_or(ParseError::MissingToken(SEPARATOR))?;
		(Some(&rest[..end]), &rest[end + SEPARATOR.len()..])
	} else {
		(None, rest)
	};

	let rest = match (label, shape.caller) {
		(Some(label), true) => expect(expect(rest, label)?, " ")?,
		(Some(label), false) => expect(expect(rest, label)?, SEPARATOR)?,
		(None, _) => rest,
	};

	let (caller, text) = if shape.caller {
		let rest = expect(rest, CALLER_OPEN)?;
		let end = rest
			.find(CALLER_END)
			.ok_or(ParseError::MissingToken(CALLER_END))?;
		(Some(&rest[..end]), &rest[end + CALLER_END.len()..])
	} else {
		(None, rest)
	};

	Ok(ParsedLine { timestamp, kind, app_name, caller, text })
}

fn expect<'a>(s: &'a str, token: &'static str) -> Result<&'a str, ParseError> {
	s.strip_prefix(token).ok_or(ParseError::MissingToken(token))
}

/// Offset of the first `: ` that is immediately followed by `next`.
fn find_after_separator(s: &str, next: &str) -> Option<usize> {
	s.match_indices(SEPARATOR)
		.map(|(i, _)| i)
		.find(|&i| s[i + SEPARATOR.len()..].starts_with(next))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::format::{render, Paint};

	const TS: &str = "2024-01-01 00:00:00";

	#[test]
	fn round_trips_all_templates() {
		for kind in StatusKind::ALL {
			for shape in LineShape::ALL {
				let app_name = shape.app_name.then_some("myapp");
				let caller = shape.caller.then_some("flush");
				let msg = StatusMessage::new(kind, "disk: full").caller(caller).app_name(app_name);
				let line = render(TS, &msg, Paint::Plain);

				let parsed = parse_line(kind, shape, &line).unwrap();
				assert_eq!(parsed.message(), msg, "{line:?}");
				assert_eq!(parsed.timestamp.to_string(), TS);
			}
		}
	}

	#[test]
	fn empty_text_round_trips() {
		let shape = LineShape { app_name: false, caller: true };
		let parsed = parse_line(StatusKind::Execution, shape, "2024-01-01 00:00:00> in 'init': \n").unwrap();
		assert_eq!(parsed.caller, Some("init"));
		assert_eq!(parsed.text, "");
		assert_eq!(parsed.label(), None);
	}

	#[test]
	fn wrong_label_is_rejected() {
		let shape = LineShape::default();
		let err = parse_line(StatusKind::Warning, shape, "2024-01-01 00:00:00> ERROR: boom").unwrap_err();
		assert_eq!(err, ParseError::MissingToken("WARNING"));
	}

	#[test]
	fn short_or_bad_timestamps_are_rejected() {
		let shape = LineShape::default();
		assert_eq!(parse_line(StatusKind::Execution, shape, "12:00> hi"), Err(ParseError::MissingTimestamp));
		assert!(matches!(
			parse_line(StatusKind::Execution, shape, "2024-13-01 00:00:00> hi"),
			Err(ParseError::BadTimestamp(_))
		));
	}

	#[test]
	fn missing_prompt_is_rejected() {
		let shape = LineShape::default();
		assert_eq!(
			parse_line(StatusKind::Execution, shape, "2024-01-01 00:00:00 hi"),
			Err(ParseError::MissingToken(PROMPT))
		);
	}

	#[test]
	fn unterminated_caller_is_rejected() {
		let shape = LineShape { app_name: false, caller: true };
		assert_eq!(
			parse_line(StatusKind::Error, shape, "2024-01-01 00:00:00> ERROR in 'flush disk full"),
			Err(ParseError::MissingToken(CALLER_END))
		);
	}
}
