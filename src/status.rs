// ══════════════════════════════════════════════════════════════════════════════
// STATUS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The value types a status report is made of: its severity kind, the stream
// that kind is routed to, and the short-lived message handed to the formatter.

use std::fmt;
use crate::constants::{ERROR_LABEL, WARNING_LABEL};

/// Severity of a status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
	/// Progress of normal execution. Goes to stdout and carries no label.
	Execution,
	Warning,
	Error,
}

/// One of the two process-wide text sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
	Stdout,
	Stderr,
}

impl StatusKind {
	pub const ALL: [StatusKind; 3] = [StatusKind::Execution, StatusKind::Warning, StatusKind::Error];

	/// Destination stream. Warnings and errors never go to stdout.
	pub fn stream(self) -> Stream {
		match self {
			StatusKind::Execution => Stream::Stdout,
			StatusKind::Warning | StatusKind::Error => Stream::Stderr,
		}
	}

	/// Label token printed before the message, if any.
	pub fn label(self) -> Option<&'static str> {
		match self {
			StatusKind::Execution => None,
			StatusKind::Warning => Some(WARNING_LABEL),
			StatusKind::Error => Some(ERROR_LABEL),
		}
	}
}

impl fmt::Display for Stream {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Stream::Stdout => f.write_str("stdout"),
			Stream::Stderr => f.write_str("stderr"),
		}
	}
}

/// A status report about to be rendered. Built per call and dropped right after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMessage<'a> {
	pub kind: StatusKind,
	pub text: &'a str,
	pub caller: Option<&'a str>,
	pub app_name: Option<&'a str>,
}

impl<'a> StatusMessage<'a> {
	pub fn new(kind: StatusKind, text: &'a str) -> Self {
		Self { kind, text, caller: None, app_name: None }
	}

	pub fn caller(mut self, caller: Option<&'a str>) -> Self {
		self.caller = caller;
		self
	}

	pub fn app_name(mut self, app_name: Option<&'a str>) -> Self {
		self.app_name = app_name;
		self
	}

	pub fn shape(&self) -> LineShape {
		LineShape::of(self.app_name, self.caller)
	}
}

/// Which optional segments a rendered line carries. Together with the kind
/// this picks one of the eight line templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineShape {
	pub app_name: bool,
	pub caller: bool,
}

impl LineShape {
	pub const ALL: [LineShape; 4] = [
		LineShape { app_name: false, caller: false },
		LineShape { app_name: true, caller: false },
		LineShape { app_name: false, caller: true },
		LineShape { app_name: true, caller: true },
	];

	pub fn of(app_name: Option<&str>, caller: Option<&str>) -> Self {
		Self { app_name: app_name.is_some(), caller: caller.is_some() }
	}
}
