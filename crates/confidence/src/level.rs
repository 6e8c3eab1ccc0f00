//! Two-sided confidence level and its percentile bounds.

use serde::Serialize;

use crate::error::ConfidenceError;

/// Two-sided confidence level, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Creates a level from a percentage strictly between 0 and 100.
    ///
    /// # Errors
    ///
    /// Returns [`ConfidenceError::InvalidLevel`] otherwise, NaN included.
    pub fn new(percent: f64) -> Result<Self, ConfidenceError> {
        if percent > 0.0 && percent < 100.0 {
            Ok(Self(percent))
        } else {
            Err(ConfidenceError::InvalidLevel { percent })
        }
    }

    /// The level in percent.
    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Significance level in percent (`100 - level`).
    pub fn alpha(&self) -> f64 {
        100.0 - self.0
    }

    /// Percentile of the lower bound.
    pub fn lower_percentile(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Percentile of the upper bound.
    pub fn upper_percentile(&self) -> f64 {
        100.0 - self.alpha() / 2.0
    }
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self(95.0)
    }
}
