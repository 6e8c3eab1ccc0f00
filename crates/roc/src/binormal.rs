//! Binormal ROC model: a straight line fitted in normal-quantile space.

use hyetos_stats::{linear_fit, normal_cdf, probit, r2_score, trapezoid_area};

use crate::config::BinormalConfig;
use crate::error::RocError;

/// A binormal model fitted to an empirical ROC curve.
///
/// The model is `probit(HR) = slope * probit(FAR) + intercept`. Besides the
/// parameters it keeps the smoothed curve in probability space and the
/// z-space points used by the regression, for goodness-of-fit inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct BinormalFit {
    slope: f64,
    intercept: f64,
    r2: f64,
    hit_rate: Vec<f64>,
    false_alarm_rate: Vec<f64>,
    z_hit_rate: Vec<f64>,
    z_false_alarm_rate: Vec<f64>,
    predicted: Vec<f64>,
}

impl BinormalFit {
    /// Gradient of the fitted line in z-space.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Intercept of the fitted line in z-space.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Coefficient of determination of the fit, measured in z-space.
    pub fn r2(&self) -> f64 {
        self.r2
    }

    /// Hit rates of the smoothed curve, one per grid sample.
    pub fn hit_rate(&self) -> &[f64] {
        &self.hit_rate
    }

    /// False alarm rates of the smoothed curve, one per grid sample.
    pub fn false_alarm_rate(&self) -> &[f64] {
        &self.false_alarm_rate
    }

    /// Hit-rate z-scores retained for the regression.
    pub fn z_hit_rate(&self) -> &[f64] {
        &self.z_hit_rate
    }

    /// False-alarm-rate z-scores retained for the regression.
    pub fn z_false_alarm_rate(&self) -> &[f64] {
        &self.z_false_alarm_rate
    }

    /// Abscissae at which the regression was evaluated (the retained
    /// false-alarm z-scores).
    pub fn predicted_x(&self) -> &[f64] {
        &self.z_false_alarm_rate
    }

    /// Fitted hit-rate z-scores at [`predicted_x`](Self::predicted_x).
    pub fn predicted_y(&self) -> &[f64] {
        &self.predicted
    }

    /// Trapezoidal area under the smoothed curve.
    pub fn area(&self) -> f64 {
        trapezoid_area(&self.false_alarm_rate, &self.hit_rate)
    }
}

/// Fits the binormal model on the default z-space grid.
///
/// See [`fit_binormal_with`].
pub fn fit_binormal(hit_rate: &[f64], false_alarm_rate: &[f64]) -> Result<BinormalFit, RocError> {
    fit_binormal_with(hit_rate, false_alarm_rate, &BinormalConfig::default())
}

/// Fits the binormal model to an empirical ROC curve.
///
/// 1. Both rate sequences go through the probit function; 0 and 1 become
///    infinite, NaN stays NaN.
/// 2. Only indices where both z-scores are finite are kept.
/// 3. An ordinary least squares line regresses hit-rate z on false-alarm z.
/// 4. The line is sampled on `config`'s grid and both axes are mapped back
///    through the normal CDF.
/// 5. R² compares the retained hit-rate z-scores with the line's predictions.
///
/// # Errors
///
/// Returns [`RocError::CurveLengthMismatch`] if the sequences differ in
/// length, [`RocError::InsufficientFitData`] if fewer than two finite pairs
/// remain, [`RocError::DegenerateFit`] if the retained false-alarm z-scores
/// are all equal, or [`RocError::InvalidConfig`] for an invalid grid.
pub fn fit_binormal_with(
    hit_rate: &[f64],
    false_alarm_rate: &[f64],
    config: &BinormalConfig,
) -> Result<BinormalFit, RocError> {
    config.validate()?;
    if hit_rate.len() != false_alarm_rate.len() {
        return Err(RocError::CurveLengthMismatch {
            hit_rate: hit_rate.len(),
            false_alarm_rate: false_alarm_rate.len(),
        });
    }

    let (z_false_alarm_rate, z_hit_rate): (Vec<f64>, Vec<f64>) = false_alarm_rate
        .iter()
        .zip(hit_rate)
        .map(|(&far, &hr)| (probit(far), probit(hr)))
        .filter(|(zf, zh)| zf.is_finite() && zh.is_finite())
        .unzip();

    if z_hit_rate.len() < 2 {
        return Err(RocError::InsufficientFitData {
            finite_pairs: z_hit_rate.len(),
        });
    }

    let line = linear_fit(&z_false_alarm_rate, &z_hit_rate).ok_or_else(|| {
        RocError::DegenerateFit {
            reason: format!(
                "all {} retained false alarm z-scores are equal",
                z_false_alarm_rate.len()
            ),
        }
    })?;

    let grid = config.grid();
    let false_alarm_curve: Vec<f64> = grid.iter().map(|&x| normal_cdf(x)).collect();
    let hit_curve: Vec<f64> = grid
        .iter()
        .map(|&x| normal_cdf(line.predict(x)))
        .collect();

    let predicted: Vec<f64> = z_false_alarm_rate
        .iter()
        .map(|&x| line.predict(x))
        .collect();
    let r2 = r2_score(&z_hit_rate, &predicted);

    Ok(BinormalFit {
        slope: line.slope,
        intercept: line.intercept,
        r2,
        hit_rate: hit_curve,
        false_alarm_rate: false_alarm_curve,
        z_hit_rate,
        z_false_alarm_rate,
        predicted,
    })
}
