//! Probabilistic contingency table: one 2x2 table per decision threshold.

use crate::error::RocError;

/// The four outcome counts of a yes/no forecast at one decision threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContingencyCounts {
    /// "Yes" forecast, event observed.
    pub hits: usize,
    /// "Yes" forecast, event not observed.
    pub false_alarms: usize,
    /// "No" forecast, event observed.
    pub misses: usize,
    /// "No" forecast, event not observed.
    pub correct_negatives: usize,
}

impl ContingencyCounts {
    /// Total number of verification instances.
    pub fn total(&self) -> usize {
        self.hits + self.false_alarms + self.misses + self.correct_negatives
    }

    /// hits / (hits + misses). NaN when no event was observed.
    pub fn hit_rate(&self) -> f64 {
        ratio(self.hits, self.hits + self.misses)
    }

    /// false alarms / (false alarms + correct negatives). NaN when the event
    /// was observed at every instance.
    pub fn false_alarm_rate(&self) -> f64 {
        ratio(self.false_alarms, self.false_alarms + self.correct_negatives)
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        f64::NAN
    } else {
        num as f64 / den as f64
    }
}

/// Contingency counts for every decision threshold of an ensemble.
///
/// Row `i` (for `i` in `0..=total_members`) forecasts "yes" when at least
/// `total_members - i` members exceed the rainfall threshold, so the sweep
/// runs from the strictest decision (all members agree) to the most lenient
/// (every instance is a "yes").
#[derive(Debug, Clone, PartialEq)]
pub struct ContingencyTable {
    rows: Vec<ContingencyCounts>,
    total_members: u32,
    positives: usize,
    negatives: usize,
}

impl ContingencyTable {
    /// Number of rows (`total_members + 1`).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: a table holds at least the row for zero members.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ensemble size used for the sweep.
    pub fn total_members(&self) -> u32 {
        self.total_members
    }

    /// Members required for a "yes" forecast at row `index`, if the row
    /// exists.
    pub fn threshold_members(&self, index: usize) -> Option<u32> {
        u32::try_from(index)
            .ok()
            .and_then(|i| self.total_members.checked_sub(i))
    }

    /// Counts at row `index`, if it exists.
    pub fn counts(&self, index: usize) -> Option<&ContingencyCounts> {
        self.rows.get(index)
    }

    /// All rows, strictest threshold first.
    pub fn rows(&self) -> &[ContingencyCounts] {
        &self.rows
    }

    /// Number of verification instances.
    pub fn sample_size(&self) -> usize {
        self.positives + self.negatives
    }

    /// Instances where the event was observed.
    pub fn positives(&self) -> usize {
        self.positives
    }

    /// Instances where the event was not observed.
    pub fn negatives(&self) -> usize {
        self.negatives
    }

    /// Hit rate at every row.
    pub fn hit_rates(&self) -> Vec<f64> {
        self.rows.iter().map(ContingencyCounts::hit_rate).collect()
    }

    /// False alarm rate at every row.
    pub fn false_alarm_rates(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(ContingencyCounts::false_alarm_rate)
            .collect()
    }
}

/// Validates a paired sample of member counts and observation flags.
pub(crate) fn validate_sample(
    member_counts: &[u32],
    observed: &[bool],
    total_members: u32,
) -> Result<(), RocError> {
    if member_counts.len() != observed.len() {
        return Err(RocError::LengthMismatch {
            members: member_counts.len(),
            observed: observed.len(),
        });
    }
    if member_counts.is_empty() {
        return Err(RocError::EmptySample);
    }
    if let Some((index, &count)) = member_counts
        .iter()
        .enumerate()
        .find(|&(_, &c)| c > total_members)
    {
        return Err(RocError::MemberCountOutOfRange {
            index,
            count,
            total_members,
        });
    }
    Ok(())
}

/// Builds the contingency table for every decision threshold.
///
/// One pass bins the sample by member count, separately for observed and
/// not-observed instances; a running sum from the highest count downwards
/// then yields the "yes" counts of each successive threshold.
///
/// # Errors
///
/// Returns [`RocError::LengthMismatch`], [`RocError::EmptySample`], or
/// [`RocError::MemberCountOutOfRange`] for malformed samples.
pub fn contingency_sweep(
    member_counts: &[u32],
    observed: &[bool],
    total_members: u32,
) -> Result<ContingencyTable, RocError> {
    validate_sample(member_counts, observed, total_members)?;

    let n_levels = total_members as usize + 1;
    let mut observed_hist = vec![0usize; n_levels];
    let mut unobserved_hist = vec![0usize; n_levels];
    for (&count, &obs) in member_counts.iter().zip(observed) {
        if obs {
            observed_hist[count as usize] += 1;
        } else {
            unobserved_hist[count as usize] += 1;
        }
    }

    let positives: usize = observed_hist.iter().sum();
    let negatives: usize = unobserved_hist.iter().sum();

    let mut rows = Vec::with_capacity(n_levels);
    let mut yes_observed = 0;
    let mut yes_unobserved = 0;
    for index in 0..n_levels {
        let required = n_levels - 1 - index;
        yes_observed += observed_hist[required];
        yes_unobserved += unobserved_hist[required];
        rows.push(ContingencyCounts {
            hits: yes_observed,
            false_alarms: yes_unobserved,
            misses: positives - yes_observed,
            correct_negatives: negatives - yes_unobserved,
        });
    }

    Ok(ContingencyTable {
        rows,
        total_members,
        positives,
        negatives,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_rates() {
        let c = ContingencyCounts {
            hits: 3,
            false_alarms: 1,
            misses: 1,
            correct_negatives: 3,
        };
        assert_eq!(c.total(), 8);
        assert_eq!(c.hit_rate(), 0.75);
        assert_eq!(c.false_alarm_rate(), 0.25);
    }

    #[test]
    fn counts_rates_undefined() {
        let c = ContingencyCounts::default();
        assert!(c.hit_rate().is_nan());
        assert!(c.false_alarm_rate().is_nan());
    }

    #[test]
    fn strictest_threshold_scenario() {
        let table = contingency_sweep(&[5, 5, 0, 0], &[true, false, true, false], 5).unwrap();
        assert_eq!(table.len(), 6);
        assert_eq!(table.threshold_members(0), Some(5));
        let strict = table.counts(0).unwrap();
        assert_eq!(
            *strict,
            ContingencyCounts {
                hits: 1,
                false_alarms: 1,
                misses: 1,
                correct_negatives: 1,
            }
        );
        assert_eq!(strict.hit_rate(), 0.5);
        assert_eq!(strict.false_alarm_rate(), 0.5);
    }

    #[test]
    fn most_lenient_threshold_is_all_yes() {
        let table = contingency_sweep(&[3, 1, 0, 2], &[true, false, false, true], 3).unwrap();
        let lenient = table.counts(3).unwrap();
        assert_eq!(table.threshold_members(3), Some(0));
        assert_eq!(table.threshold_members(4), None);
        assert!(table.counts(4).is_none());
        assert_eq!(lenient.hits, 2);
        assert_eq!(lenient.false_alarms, 2);
        assert_eq!(lenient.misses, 0);
        assert_eq!(lenient.correct_negatives, 0);
    }

    #[test]
    fn zero_member_ensemble() {
        let table = contingency_sweep(&[0, 0], &[true, false], 0).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.counts(0).unwrap().hit_rate(), 1.0);
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let err = contingency_sweep(&[1, 7], &[true, true], 5).unwrap_err();
        assert_eq!(
            err,
            RocError::MemberCountOutOfRange {
                index: 1,
                count: 7,
                total_members: 5,
            }
        );
    }
}
