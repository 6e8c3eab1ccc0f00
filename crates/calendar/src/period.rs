//! Verification period: the daily forecast base times to accumulate.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::CalendarError;

/// An inclusive range of calendar days, each with one forecast base time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationPeriod {
    start: NaiveDate,
    end: NaiveDate,
    base_hour: u32,
}

impl VerificationPeriod {
    /// Creates a period running from `start` to `end` (both inclusive) with
    /// forecasts issued daily at `base_hour` UTC.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvertedPeriod`] if `end < start`, or
    /// [`CalendarError::InvalidHour`] if `base_hour > 23`.
    pub fn new(start: NaiveDate, end: NaiveDate, base_hour: u32) -> Result<Self, CalendarError> {
        if end < start {
            return Err(CalendarError::InvertedPeriod { start, end });
        }
        if base_hour > 23 {
            return Err(CalendarError::InvalidHour { hour: base_hour });
        }
        Ok(Self {
            start,
            end,
            base_hour,
        })
    }

    /// First day of the period.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the period.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Hour of day at which each forecast is issued.
    pub fn base_hour(&self) -> u32 {
        self.base_hour
    }

    /// Number of days in the period.
    pub fn n_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Iterates the forecast base times, one per day, in chronological order.
    pub fn run_times(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        let hour = self.base_hour;
        self.start
            .iter_days()
            .take(self.n_days())
            .filter_map(move |d| d.and_hms_opt(hour, 0, 0))
    }
}
