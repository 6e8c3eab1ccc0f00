//! Error types for the hyetos-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the hyetos-calendar crate.
///
/// Covers malformed verification periods and lead-time step ranges.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the final date of a period precedes its start date.
    #[error("invalid period: end date {end} precedes start date {start}")]
    InvertedPeriod {
        /// First date of the period.
        start: NaiveDate,
        /// Last date of the period.
        end: NaiveDate,
    },

    /// Returned when a base hour is outside 0..=23.
    #[error("invalid base hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The invalid hour that was provided.
        hour: u32,
    },

    /// Returned when a lead-time range is empty or has a zero step.
    #[error("invalid lead times: first={first}, last={last}, step={step}")]
    InvalidLeadTimes {
        /// First final step in hours.
        first: u32,
        /// Last final step in hours.
        last: u32,
        /// Discretisation step in hours.
        step: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_inverted_period() {
        let err = CalendarError::InvertedPeriod {
            start: NaiveDate::from_ymd_opt(2022, 1, 2).unwrap(),
            end: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "invalid period: end date 2022-01-01 precedes start date 2022-01-02"
        );
    }

    #[test]
    fn error_invalid_hour() {
        let err = CalendarError::InvalidHour { hour: 24 };
        assert_eq!(err.to_string(), "invalid base hour: 24 (must be 0..=23)");
    }

    #[test]
    fn error_invalid_lead_times() {
        let err = CalendarError::InvalidLeadTimes {
            first: 12,
            last: 246,
            step: 0,
        };
        assert_eq!(
            err.to_string(),
            "invalid lead times: first=12, last=246, step=0"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
