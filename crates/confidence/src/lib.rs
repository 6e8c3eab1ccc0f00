//! # hyetos-confidence
//!
//! Percentile confidence bands from bootstrapped verification scores, such
//! as the reliability component of the Brier score per lead time.

mod band;
mod error;
mod level;

pub use band::{ConfidenceBand, confidence_band};
pub use error::ConfidenceError;
pub use level::ConfidenceLevel;
