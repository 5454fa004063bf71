//! Injectable "now" source.
//!
//! The resolver and generator are pure functions of their inputs plus the
//! current wall-clock time. Callers either pass `now` explicitly or hand a
//! [`Clock`] to [`crate::Scheduler`].

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::error::Result;
use crate::window::parse_datetime;

pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Reads the host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant. Used by tests and by bindings where the
/// caller supplies "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Parse a local datetime such as `"2026-11-02T10:15"`.
    pub fn at(datetime: &str) -> Result<Self> {
        parse_datetime(datetime).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
