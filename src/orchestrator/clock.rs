//! Current-date suppliers

use std::cell::Cell;

use chrono::{DateTime, Days, Duration, Local, NaiveDate, NaiveTime, Utc};

use crate::domain::dates;

/// Supplies the current calendar day and instant
pub trait Clock {
    fn today(&self) -> NaiveDate;

    fn now(&self) -> DateTime<Utc>;

    /// Today as `YYYY-MM-DD`
    fn today_string(&self) -> String {
        dates::format_date(self.today())
    }
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually controlled date, for tests and replays.
///
/// The instant is the local day plus a fixed time of day and UTC offset, so a
/// clock west of UTC can report a `now` that falls on the next UTC date.
#[derive(Debug, Clone)]
pub struct FixedClock {
    day: Cell<NaiveDate>,
    time: NaiveTime,
    offset_hours: i64,
}

impl FixedClock {
    /// Noon UTC on `day`
    pub fn new(day: NaiveDate) -> Self {
        Self::at(day, NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN), 0)
    }

    /// Local `time` on `day` in a zone `offset_hours` from UTC (negative is west)
    pub fn at(day: NaiveDate, time: NaiveTime, offset_hours: i64) -> Self {
        Self {
            day: Cell::new(day),
            time,
            offset_hours,
        }
    }

    pub fn set(&self, day: NaiveDate) {
        self.day.set(day);
    }

    /// Move forward by `days` calendar days
    pub fn advance(&self, days: u64) {
        let next = self.day.get() + Days::new(days);
        self.day.set(next);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.day.get()
    }

    fn now(&self) -> DateTime<Utc> {
        self.day.get().and_time(self.time).and_utc() - Duration::hours(self.offset_hours)
    }
}
