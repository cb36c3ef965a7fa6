// ══════════════════════════════════════════════════════════════════════════════
// REPORTER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Timestamped status reporting. Each call reads the clock once, renders one
// line and writes it in a single `write_all` to the stream its kind routes to:
// execution progress to stdout, warnings and errors to stderr.
//
// The streams are plain `Write` values so a reporter can target the process
// stdio, a file, or an in-memory buffer alike.

use std::io::{self, Stderr, Stdout, Write};
use crate::clock::{Clock, LocalClock};
use crate::error::ReportError;
use crate::format::{render, timestamp, Paint};
use crate::status::{StatusKind, StatusMessage, Stream};

/// Writes status lines to an output sink and an error sink.
#[derive(Debug)]
pub struct StatusReporter<O, E, C = LocalClock> {
	out: O,
	err: E,
	clock: C,
	app_name: Option<String>,
	paint: Paint,
}

impl StatusReporter<Stdout, Stderr> {
	/// Reporter bound to the process stdout and stderr.
	pub fn stdio() -> Self {
		Self::new(io::stdout(), io::stderr())
	}
}

impl<O: Write, E: Write> StatusReporter<O, E> {
	pub fn new(out: O, err: E) -> Self {
		Self {
			out,
			err,
			clock: LocalClock,
			app_name: None,
			paint: Paint::Plain,
		}
	}
}

impl<O: Write, E: Write, C: Clock> StatusReporter<O, E, C> {
	/// Replaces the time source.
	pub fn with_clock<N: Clock>(self, clock: N) -> StatusReporter<O, E, N> {
		StatusReporter {
			out: self.out,
			err: self.err,
			clock,
			app_name: self.app_name,
			paint: self.paint,
		}
	}

	/// Application name used when a call does not pass its own.
	pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
		self.app_name = Some(app_name.into());
		self
	}

	pub fn with_paint(mut self, paint: Paint) -> Self {
		self.paint = paint;
		self
	}

	/// Renders and writes one status line.
	///
	/// Returns the number of bytes written, newline included. An explicit
	/// `app_name` overrides the reporter's default one.
	pub fn report(
		&mut self,
		kind: StatusKind,
		text: &str,
		caller: Option<&str>,
		app_name: Option<&str>,
	) -> Result<usize, ReportError> {
		let message = StatusMessage::new(kind, text)
			.caller(caller)
			.app_name(app_name.or(self.app_name.as_deref()));
		let line = self.render(&message);
		self.write_line(kind.stream(), &line)
	}

	pub fn report_execution(&mut self, text: &str, caller: Option<&str>, app_name: Option<&str>) -> Result<usize, ReportError> {
		self.report(StatusKind::Execution, text, caller, app_name)
	}

	pub fn report_warning(&mut self, text: &str, caller: Option<&str>, app_name: Option<&str>) -> Result<usize, ReportError> {
		self.report(StatusKind::Warning, text, caller, app_name)
	}

	pub fn report_error(&mut self, text: &str, caller: Option<&str>, app_name: Option<&str>) -> Result<usize, ReportError> {
		self.report(StatusKind::Error, text, caller, app_name)
	}

	/// Writes an already assembled message as-is; the default app name is not applied.
	pub fn emit(&mut self, message: &StatusMessage<'_>) -> Result<usize, ReportError> {
		let line = self.render(message);
		self.write_line(message.kind.stream(), &line)
	}

	pub fn out(&self) -> &O {
		&self.out
	}

	pub fn err(&self) -> &E {
		&self.err
	}

	pub fn into_inner(self) -> (O, E) {
		(self.out, self.err)
	}

	fn render(&self, message: &StatusMessage<'_>) -> String {
		render(&timestamp(self.clock.now()), message, self.paint)
	}

	fn write_line(&mut self, stream: Stream, line: &str) -> Result<usize, ReportError> {
		let sink: &mut dyn Write = match stream {
			Stream::Stdout => &mut self.out,
			Stream::Stderr => &mut self.err,
		};

		// Flushed per line so stdout and stderr output keep their call order.
		sink.write_all(line.as_bytes())
			.and_then(|()| sink.flush())
			.map_err(|source| ReportError::WriteFailure { stream, source })?;

		Ok(line.len())
	}
}

// ══════════════════════════════════════════════════════════════════════════════
// PROCESS STDIO SHORTCUTS
// ══════════════════════════════════════════════════════════════════════════════

/// Reports to the process stdout/stderr with local time and no styling.
pub fn report(kind: StatusKind, text: &str, caller: Option<&str>, app_name: Option<&str>) -> Result<usize, ReportError> {
	StatusReporter::stdio().report(kind, text, caller, app_name)
}

pub fn report_execution(text: &str, caller: Option<&str>, app_name: Option<&str>) -> Result<usize, ReportError> {
	report(StatusKind::Execution, text, caller, app_name)
}

pub fn report_warning(text: &str, caller: Option<&str>, app_name: Option<&str>) -> Result<usize, ReportError> {
	report(StatusKind::Warning, text, caller, app_name)
}

pub fn report_error(text: &str, caller: Option<&str>, app_name: Option<&str>) -> Result<usize, ReportError> {
	report(StatusKind::Error, text, caller, app_name)
}
