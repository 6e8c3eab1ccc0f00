//! Empirical ("real") ROC curve from the contingency sweep.

use hyetos_stats::trapezoid_area;

use crate::contingency::{ContingencyTable, contingency_sweep};
use crate::error::RocError;

/// Hit-rate / false-alarm-rate curve closed at (0,0) and (1,1).
///
/// Element 0 of both sequences is exactly 0 and the last element exactly 1.
/// Elements `1..=total_members + 1` are the contingency-table rates in sweep
/// order, NaN included when the sample lacks positives or negatives.
#[derive(Debug, Clone, PartialEq)]
pub struct EmpiricalRoc {
    hit_rate: Vec<f64>,
    false_alarm_rate: Vec<f64>,
    table: ContingencyTable,
}

impl EmpiricalRoc {
    /// Anchors the rates of `table` at (0,0) and (1,1).
    pub fn from_table(table: ContingencyTable) -> Self {
        let hit_rate = anchored(table.hit_rates());
        let false_alarm_rate = anchored(table.false_alarm_rates());
        Self {
            hit_rate,
            false_alarm_rate,
            table,
        }
    }

    /// Hit rates, anchors included.
    pub fn hit_rate(&self) -> &[f64] {
        &self.hit_rate
    }

    /// False alarm rates, anchors included.
    pub fn false_alarm_rate(&self) -> &[f64] {
        &self.false_alarm_rate
    }

    /// The contingency table the curve was derived from.
    pub fn table(&self) -> &ContingencyTable {
        &self.table
    }

    /// Number of points, anchors included.
    pub fn len(&self) -> usize {
        self.hit_rate.len()
    }

    /// Always false: the anchors are always present.
    pub fn is_empty(&self) -> bool {
        self.hit_rate.is_empty()
    }

    /// Trapezoidal area under the curve; undefined points are skipped.
    pub fn area(&self) -> f64 {
        trapezoid_area(&self.false_alarm_rate, &self.hit_rate)
    }
}

fn anchored(rates: Vec<f64>) -> Vec<f64> {
    let mut out = Vec::with_capacity(rates.len() + 2);
    out.push(0.0);
    out.extend(rates);
    out.push(1.0);
    out
}

/// Computes the empirical ROC curve of an ensemble exceedance forecast.
///
/// `member_counts[i]` is the number of ensemble members exceeding the
/// rainfall threshold at instance `i`, `observed[i]` whether the observation
/// exceeded it, and `total_members` the ensemble size.
///
/// # Errors
///
/// Returns [`RocError`] if the sample is empty, the slices differ in length,
/// or a member count exceeds `total_members`.
pub fn compute_empirical_roc(
    member_counts: &[u32],
    observed: &[bool],
    total_members: u32,
) -> Result<EmpiricalRoc, RocError> {
    let table = contingency_sweep(member_counts, observed, total_members)?;
    Ok(EmpiricalRoc::from_table(table))
}
