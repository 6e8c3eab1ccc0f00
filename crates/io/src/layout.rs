//! Directory and file naming of the verification archive.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Kind of array written for one verification unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayKind {
    /// Empirical hit rates, anchors included.
    HitRate,
    /// Empirical false alarm rates, anchors included.
    FalseAlarmRate,
    /// Hit rates of the smoothed binormal curve.
    BinormalHitRate,
    /// False alarm rates of the smoothed binormal curve.
    BinormalFalseAlarmRate,
    /// Hit-rate z-scores retained for the regression.
    ZHitRate,
    /// False-alarm-rate z-scores retained for the regression.
    ZFalseAlarmRate,
    /// Abscissae of the regression check.
    RegressionX,
    /// Fitted ordinates of the regression check.
    RegressionY,
    /// Coefficient of determination, stored as a one-element array.
    R2,
}

impl ArrayKind {
    /// Every kind, in output order.
    pub const ALL: [ArrayKind; 9] = [
        ArrayKind::HitRate,
        ArrayKind::FalseAlarmRate,
        ArrayKind::BinormalHitRate,
        ArrayKind::BinormalFalseAlarmRate,
        ArrayKind::ZHitRate,
        ArrayKind::ZFalseAlarmRate,
        ArrayKind::RegressionX,
        ArrayKind::RegressionY,
        ArrayKind::R2,
    ];

    /// File name prefix of this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            ArrayKind::HitRate => "HR",
            ArrayKind::FalseAlarmRate => "FAR",
            ArrayKind::BinormalHitRate => "HRz",
            ArrayKind::BinormalFalseAlarmRate => "FARz",
            ArrayKind::ZHitRate => "HRz_inv",
            ArrayKind::ZFalseAlarmRate => "FARz_inv",
            ArrayKind::RegressionX => "x_LR",
            ArrayKind::RegressionY => "y_LR",
            ArrayKind::R2 => "r2",
        }
    }
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Path builder for one accumulation period.
///
/// Thresholds are rendered with `f64`'s `Display`, so `10.0` becomes `10`
/// and `0.2` stays `0.2`. Counts, arrays and bootstrap tables are Parquet
/// files, so names match the upstream `.npy` archive only up to the extension.
#[derive(Debug, Clone)]
pub struct Layout {
    input_dir: PathBuf,
    output_dir: PathBuf,
    accumulation: u32,
}

impl Layout {
    /// Creates a layout rooted at `input_dir` and `output_dir` for rainfall
    /// accumulated over `accumulation` hours.
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        accumulation: u32,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            accumulation,
        }
    }

    /// Root of the input archive.
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Root of the output tree.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Accumulation period in hours.
    pub fn accumulation(&self) -> u32 {
        self.accumulation
    }

    fn acc(&self) -> String {
        format!("{:02}h", self.accumulation)
    }

    /// Daily counts file of the run started at `run` for lead time `step`.
    pub fn counts_path(
        &self,
        system: &str,
        threshold: f64,
        run: NaiveDateTime,
        step: u32,
    ) -> PathBuf {
        let acc = self.acc();
        self.input_dir
            .join(&acc)
            .join(system)
            .join(threshold.to_string())
            .join(run.format("%Y%m%d%H").to_string())
            .join(format!(
                "Count_EM_OBS_{acc}_{system}_{threshold}_{}_{step:03}.parquet",
                run.format("%Y%m%d_%H")
            ))
    }

    /// Output directory of one system and threshold.
    pub fn unit_dir(&self, system: &str, threshold: f64) -> PathBuf {
        self.output_dir
            .join(self.acc())
            .join(system)
            .join(threshold.to_string())
    }

    /// Output file of one array kind for one verification unit.
    pub fn array_path(&self, kind: ArrayKind, system: &str, threshold: f64, step: u32) -> PathBuf {
        self.unit_dir(system, threshold).join(format!(
            "{kind}_{}_{system}_{threshold}_{step:03}.parquet",
            self.acc()
        ))
    }

    /// Bootstrap score table of one system and threshold.
    pub fn bootstrap_table_path(&self, system: &str, threshold: f64) -> PathBuf {
        let acc = self.acc();
        self.input_dir
            .join(&acc)
            .join("BSrel")
            .join(format!("BSrel_{acc}_{system}_{threshold}.parquet"))
    }

    /// Confidence band report of one system and threshold.
    pub fn confidence_band_path(&self, system: &str, threshold: f64) -> PathBuf {
        let acc = self.acc();
        self.output_dir
            .join(&acc)
            .join(format!("BSrel_CI_{acc}_{system}_{threshold}.json"))
    }

    /// Run summary of a batch.
    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(self.acc()).join("roc_summary.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_distinct() {
        let mut prefixes: Vec<_> = ArrayKind::ALL.iter().map(|k| k.prefix()).collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), ArrayKind::ALL.len());
    }

    #[test]
    fn display_is_prefix() {
        assert_eq!(ArrayKind::ZHitRate.to_string(), "HRz_inv");
        assert_eq!(ArrayKind::RegressionX.to_string(), "x_LR");
    }
}
