// ══════════════════════════════════════════════════════════════════════════════
// CLOCK MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Source of the wall-clock time stamped on every status line. The reporter
// reads it exactly once per call.

use chrono::{Local, NaiveDateTime};

pub trait Clock {
	/// Current local wall-clock time.
	fn now(&self) -> NaiveDateTime;
}

/// Host local time via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
	fn now(&self) -> NaiveDateTime {
		Local::now().naive_local()
	}
}

/// Always returns the same instant. Useful for reproducible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
	fn now(&self) -> NaiveDateTime {
		self.0
	}
}

impl<C: Clock + ?Sized> Clock for &C {
	fn now(&self) -> NaiveDateTime {
		(**self).now()
	}
}
