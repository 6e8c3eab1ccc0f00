//! # hyetos-calendar
//!
//! Date bookkeeping for forecast verification: which forecast base times
//! belong to a verification period, and which lead times are verified.
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use hyetos_calendar::{LeadTimes, VerificationPeriod};
//!
//! let period = VerificationPeriod::new(
//!     NaiveDate::from_ymd_opt(2021, 12, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2022, 11, 30).unwrap(),
//!     0,
//! )?;
//! assert_eq!(period.n_days(), 365);
//!
//! let leads = LeadTimes::new(12, 246, 6)?;
//! assert_eq!(leads.len(), 40);
//! ```

mod error;
mod lead_time;
mod period;

pub use error::CalendarError;
pub use lead_time::LeadTimes;
pub use period::VerificationPeriod;
