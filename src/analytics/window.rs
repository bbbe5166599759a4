use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};

use crate::error::WindowError;

/// An inclusive `[start, end]` window whose bounds both fall on midnight,
/// with `start` strictly before `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, WindowError> {
        if !is_midnight(&start) { return Err(WindowError::NotMidnight { which: "start" }) }
        if !is_midnight(&end) { return Err(WindowError::NotMidnight { which: "end" }) }
        if start >= end { return Err(WindowError::StartNotBeforeEnd) }
        Ok(Self { start, end })
    }

    /// Window from midnight (UTC) of `start` to midnight (UTC) of `end`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, WindowError> {
        Self::new(
            start.and_time(NaiveTime::MIN).and_utc(),
            end.and_time(NaiveTime::MIN).and_utc(),
        )
    }

    #[inline] pub fn start(&self) -> DateTime<Utc> { self.start }

    #[inline] pub fn end(&self) -> DateTime<Utc> { self.end }

    /// Returns true if `timestamp` lies within the window, bounds included.
    #[inline]
    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        self.start <= *timestamp && *timestamp <= self.end
    }
}

fn is_midnight(timestamp: &DateTime<Utc>) -> bool {
    timestamp.num_seconds_from_midnight() == 0 && timestamp.nanosecond() == 0
}
