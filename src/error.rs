// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════

use std::io;
use thiserror::Error;
use crate::status::Stream;

/// Failure to emit a status line.
#[derive(Debug, Error)]
pub enum ReportError {
	/// The stream rejected the write or the flush. The line may have been
	/// written partially or not at all.
	#[error("failed to write status line to {stream}")]
	WriteFailure {
		stream: Stream,
		#[source]
		source: io::Error,
	},
}

impl ReportError {
	/// Negative status for callers that still speak the `fprintf` convention.
	/// Every variant maps to it.
	pub const SENTINEL: i32 = -1;

	pub fn stream(&self) -> Stream {
		match self {
			ReportError::WriteFailure { stream, .. } => *stream,
		}
	}
}

/// Failure to recover the tokens of a rendered status line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
	#[error("line is shorter than a timestamp")]
	MissingTimestamp,
	#[error("invalid timestamp: {0}")]
	BadTimestamp(String),
	#[error("expected `{0}`")]
	MissingToken(&'static str),
}
