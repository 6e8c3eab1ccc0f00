//! Daily paired counts: ensemble members and observations exceeding a
//! rainfall threshold at each verification point.

use std::path::Path;

use tracing::debug;

use crate::error::IoError;
use crate::parquet_read::{f64_column, read_batches, u32_column};
use crate::parquet_write::{
    COUNT_EM_COLUMN, COUNT_OBS_COLUMN, Column, columns_to_record_batch, write_batches,
};
use crate::writer::WriterConfig;

/// Paired counts of one forecast run at one lead time.
///
/// Rows with a non-finite or negative observation count are dropped on read
/// and reported by [`n_dropped`](Self::n_dropped).
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCounts {
    member_counts: Vec<u32>,
    observed_counts: Vec<f64>,
    n_dropped: usize,
}

impl DailyCounts {
    /// Builds counts from paired columns, dropping unusable observations.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the columns differ in length.
    pub fn new(member_counts: Vec<u32>, observed_counts: Vec<f64>) -> Result<Self, IoError> {
        if member_counts.len() != observed_counts.len() {
            return Err(IoError::Validation {
                count: 1,
                details: format!(
                    "count_em has {} rows but count_obs has {}",
                    member_counts.len(),
                    observed_counts.len()
                ),
            });
        }

        let total = member_counts.len();
        let (member_counts, observed_counts): (Vec<u32>, Vec<f64>) = member_counts
            .into_iter()
            .zip(observed_counts)
            .filter(|&(_, obs)| obs.is_finite() && obs >= 0.0)
            .unzip();
        let n_dropped = total - member_counts.len();

        Ok(Self {
            member_counts,
            observed_counts,
            n_dropped,
        })
    }

    /// Ensemble members exceeding the threshold, per point.
    pub fn member_counts(&self) -> &[u32] {
        &self.member_counts
    }

    /// Observed exceedance count, per point.
    pub fn observed_counts(&self) -> &[f64] {
        &self.observed_counts
    }

    /// Whether the event was observed (`count_obs > 0`), per point.
    pub fn observed(&self) -> impl Iterator<Item = bool> + '_ {
        self.observed_counts.iter().map(|&c| c > 0.0)
    }

    /// Number of retained points.
    pub fn len(&self) -> usize {
        self.member_counts.len()
    }

    /// Returns `true` if no point was retained.
    pub fn is_empty(&self) -> bool {
        self.member_counts.is_empty()
    }

    /// Rows discarded because of an unusable observation count.
    pub fn n_dropped(&self) -> usize {
        self.n_dropped
    }
}

/// Reads a daily counts file.
///
/// Returns `Ok(None)` when the file does not exist: missing days are an
/// expected gap in the archive, not a failure.
///
/// # Errors
///
/// Returns [`IoError::Schema`] if `count_em` (`UInt32`) or `count_obs`
/// (`Float64`) is missing or mistyped, or [`IoError::Parquet`] if the file is
/// unreadable.
pub fn read_daily_counts(path: &Path) -> Result<Option<DailyCounts>, IoError> {
    let batches = match read_batches(path) {
        Ok(batches) => batches,
        Err(IoError::FileNotFound { .. }) => return Ok(None),
        Err(e) => return Err(e),
    };
    let member_counts = u32_column(&batches, COUNT_EM_COLUMN, path)?;
    let observed_counts = f64_column(&batches, COUNT_OBS_COLUMN, path)?;
    DailyCounts::new(member_counts, observed_counts).map(Some)
}

/// Writes paired counts in the format read by [`read_daily_counts`].
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the slices differ in length or the
/// configuration is invalid, or an I/O or Parquet error if writing fails.
pub fn write_daily_counts(
    path: &Path,
    member_counts: &[u32],
    observed_counts: &[f64],
    config: &WriterConfig,
) -> Result<(), IoError> {
    if member_counts.len() != observed_counts.len() {
        return Err(IoError::Validation {
            count: 1,
            details: format!(
                "count_em has {} rows but count_obs has {}",
                member_counts.len(),
                observed_counts.len()
            ),
        });
    }
    let props = config.properties()?;
    let (schema, batch) = columns_to_record_batch(vec![
        Column::UInt32(COUNT_EM_COLUMN, member_counts.to_vec()),
        Column::Float64(COUNT_OBS_COLUMN, observed_counts.to_vec()),
    ])?;
    write_batches(path, &[batch], &schema, props)
}

/// Paired sample pooled over every available day of a verification period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodSample {
    member_counts: Vec<u32>,
    observed: Vec<bool>,
    n_days_read: usize,
    n_days_missing: usize,
    n_dropped: usize,
}

impl PeriodSample {
    /// Pooled member counts, in day order.
    pub fn member_counts(&self) -> &[u32] {
        &self.member_counts
    }

    /// Pooled observation flags, aligned with [`member_counts`](Self::member_counts).
    pub fn observed(&self) -> &[bool] {
        &self.observed
    }

    /// Number of pooled points.
    pub fn len(&self) -> usize {
        self.member_counts.len()
    }

    /// Returns `true` if nothing was pooled.
    pub fn is_empty(&self) -> bool {
        self.member_counts.is_empty()
    }

    /// Days whose file was found and read.
    pub fn n_days_read(&self) -> usize {
        self.n_days_read
    }

    /// Days whose file was absent.
    pub fn n_days_missing(&self) -> usize {
        self.n_days_missing
    }

    /// Rows dropped across all days because of unusable observations.
    pub fn n_dropped(&self) -> usize {
        self.n_dropped
    }

    fn push(&mut self, day: DailyCounts) {
        self.member_counts.extend_from_slice(day.member_counts());
        self.observed.extend(day.observed());
        self.n_dropped += day.n_dropped();
        self.n_days_read += 1;
    }
}

/// Reads and concatenates the daily counts files of a period, in order.
///
/// Absent files are skipped and counted in
/// [`PeriodSample::n_days_missing`].
///
/// # Errors
///
/// Returns the first error of a file that exists but cannot be read.
pub fn read_period<I, P>(paths: I) -> Result<PeriodSample, IoError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut sample = PeriodSample::default();
    for path in paths {
        let path = path.as_ref();
        match read_daily_counts(path)? {
            Some(day) => sample.push(day),
            None => {
                debug!(path = %path.display(), "daily counts file missing, skipping");
                sample.n_days_missing += 1;
            }
        }
    }
    Ok(sample)
}
