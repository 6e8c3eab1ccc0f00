//! Percentile confidence band around a score series.

use hyetos_stats::{mean, nan_percentile};
use serde::Serialize;

use crate::error::ConfidenceError;
use crate::level::ConfidenceLevel;

/// Score per lead time with its bootstrap confidence bounds.
///
/// Non-finite values serialize as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceBand {
    steps: Vec<u32>,
    real: Vec<f64>,
    lower: Vec<f64>,
    upper: Vec<f64>,
    level: ConfidenceLevel,
}

impl ConfidenceBand {
    /// Lead times, in hours.
    pub fn steps(&self) -> &[u32] {
        &self.steps
    }

    /// Score of the full sample.
    pub fn real(&self) -> &[f64] {
        &self.real
    }

    /// Lower bound per lead time.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper bound per lead time.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Confidence level of the bounds.
    pub fn level(&self) -> ConfidenceLevel {
        self.level
    }

    /// Mean spacing between consecutive lead times; 0 with a single step.
    pub fn discretisation(&self) -> f64 {
        let gaps: Vec<f64> = self
            .steps
            .windows(2)
            .map(|w| f64::from(w[1]) - f64::from(w[0]))
            .collect();
        mean(&gaps)
    }

    /// Pretty-printed JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfidenceError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String, ConfidenceError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfidenceError::Serialization {
            reason: e.to_string(),
        })
    }
}

/// Builds the confidence band of a bootstrapped score series.
///
/// For lead time `i`, the bounds are the NaN-ignoring percentiles
/// `alpha / 2` and `100 - alpha / 2` of `bootstrap[i]`. A row without any
/// non-NaN replicate gets NaN bounds.
///
/// # Errors
///
/// Returns [`ConfidenceError::EmptyTable`] without lead times, or
/// [`ConfidenceError::LengthMismatch`] if the inputs differ in length.
pub fn confidence_band(
    steps: &[u32],
    real: &[f64],
    bootstrap: &[Vec<f64>],
    level: ConfidenceLevel,
) -> Result<ConfidenceBand, ConfidenceError> {
    if steps.len() != real.len() || steps.len() != bootstrap.len() {
        return Err(ConfidenceError::LengthMismatch {
            steps: steps.len(),
            real: real.len(),
            rows: bootstrap.len(),
        });
    }
    if steps.is_empty() {
        return Err(ConfidenceError::EmptyTable);
    }

    let (lower, upper) = bootstrap
        .iter()
        .map(|row| {
            (
                nan_percentile(row, level.lower_percentile()).unwrap_or(f64::NAN),
                nan_percentile(row, level.upper_percentile()).unwrap_or(f64::NAN),
            )
        })
        .unzip();

    Ok(ConfidenceBand {
        steps: steps.to_vec(),
        real: real.to_vec(),
        lower,
        upper,
        level,
    })
}
