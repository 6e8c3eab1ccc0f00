//! Statistical helper functions for hyetos forecast verification.
//!
//! Everything here is pure and infallible: degenerate input yields `NaN`,
//! `None`, or a documented fallback value rather than an error.

use std::f64::consts::SQRT_2;

use statrs::function::erf::{erfc, erfc_inv};

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// R's default quantile algorithm (type=7), also numpy's `linear` method.
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Percentile of `data` ignoring NaN values, with linear interpolation.
///
/// `q` is expressed in percent (0..=100). Returns `None` when every value is
/// NaN or `data` is empty.
pub fn nan_percentile(data: &[f64], q: f64) -> Option<f64> {
    let mut kept: Vec<f64> = data.iter().copied().filter(|v| !v.is_nan()).collect();
    if kept.is_empty() {
        return None;
    }
    kept.sort_by(f64::total_cmp);
    Some(quantile_type7(&kept, (q / 100.0).clamp(0.0, 1.0)))
}

/// Standard normal cumulative distribution function.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Inverse of the standard normal CDF (probit / percent-point function).
///
/// `0` maps to `-inf` and `1` to `+inf`. NaN and values outside `[0, 1]`
/// map to NaN.
pub fn probit(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    -SQRT_2 * erfc_inv(2.0 * p)
}

/// A first-degree polynomial `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Gradient of the line.
    pub slope: f64,
    /// Value at `x = 0`.
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluates the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least squares line through `(x[i], y[i])`.
///
/// Only the common prefix of the two slices is used. Returns `None` if fewer
/// than 2 points are available or if `x` is constant (the line is then
/// undefined).
pub fn linear_fit(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    let n = x.len().min(y.len());
    if n < 2 {
        return None;
    }
    let (x, y) = (&x[..n], &y[..n]);
    let mx = mean(x);
    let my = mean(y);

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mx;
        sxx += dx * dx;
        sxy += dx * (yi - my);
    }

    if sxx == 0.0 || !sxx.is_finite() {
        return None;
    }

    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: my - slope * mx,
    })
}

/// Coefficient of determination between observations and predictions.
///
/// Follows the scikit-learn convention for constant observations: 1.0 when
/// the prediction is exact, 0.0 otherwise.
pub fn r2_score(observed: &[f64], predicted: &[f64]) -> f64 {
    let n = observed.len().min(predicted.len());
    if n == 0 {
        return f64::NAN;
    }
    let observed = &observed[..n];
    let my = mean(observed);

    let ss_res: f64 = observed
        .iter()
        .zip(predicted)
        .map(|(o, p)| (o - p) * (o - p))
        .sum();
    let ss_tot: f64 = observed.iter().map(|o| (o - my) * (o - my)).sum();

    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}

/// Trapezoidal integral of `y` over `x`.
///
/// Points where either coordinate is not finite are skipped; the remaining
/// points are joined in their original order. Returns 0.0 with fewer than two
/// usable points.
pub fn trapezoid_area(x: &[f64], y: &[f64]) -> f64 {
    let points: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        .map(|(xi, yi)| (*xi, *yi))
        .collect();

    points
        .windows(2)
        .map(|w| 0.5 * (w[1].0 - w[0].0) * (w[0].1 + w[1].1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_quantile_type7() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_type7(&sorted, 0.25), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quantile_type7_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        // p=0.1 → h=0.4, lo=0, hi=1 → 1 + 0.4*(2-1) = 1.4
        assert_relative_eq!(quantile_type7(&sorted, 0.1), 1.4, epsilon = 1e-10);
    }

    #[test]
    #[should_panic(expected = "quantile_type7: input must not be empty")]
    fn test_quantile_type7_empty_panics() {
        quantile_type7(&[], 0.5);
    }

    #[test]
    fn test_nan_percentile_ignores_nan() {
        let data = [5.0, f64::NAN, 1.0, 3.0, f64::NAN, 2.0, 4.0];
        assert_relative_eq!(nan_percentile(&data, 50.0).unwrap(), 3.0);
        assert_relative_eq!(nan_percentile(&data, 0.0).unwrap(), 1.0);
        assert_relative_eq!(nan_percentile(&data, 100.0).unwrap(), 5.0);
        // numpy: np.nanpercentile([1,2,3,4,5], 0.5) = 1.02
        assert_relative_eq!(nan_percentile(&data, 0.5).unwrap(), 1.02, epsilon = 1e-12);
    }

    #[test]
    fn test_nan_percentile_all_nan() {
        assert!(nan_percentile(&[f64::NAN, f64::NAN], 50.0).is_none());
        assert!(nan_percentile(&[], 50.0).is_none());
    }

    #[test]
    fn test_normal_cdf_reference_values() {
        assert_relative_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-15);
        // statrs' erfc is accurate to roughly 1e-11 here.
        assert_relative_eq!(normal_cdf(1.0), 0.841_344_746_068_542_9, epsilon = 1e-10);
        assert_relative_eq!(normal_cdf(-1.96), 0.024_997_895_148_220_4, epsilon = 1e-10);
        assert_eq!(normal_cdf(f64::NEG_INFINITY), 0.0);
        assert_eq!(normal_cdf(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_probit_reference_values() {
        assert_relative_eq!(probit(0.5), 0.0, epsilon = 1e-15);
        assert_relative_eq!(probit(0.975), 1.959_963_984_540_054, epsilon = 1e-9);
        assert_relative_eq!(probit(0.1), -1.281_551_565_544_600_4, epsilon = 1e-9);
    }

    #[test]
    fn test_probit_bounds() {
        assert_eq!(probit(0.0), f64::NEG_INFINITY);
        assert_eq!(probit(1.0), f64::INFINITY);
        assert!(probit(f64::NAN).is_nan());
        assert!(probit(-0.1).is_nan());
        assert!(probit(1.1).is_nan());
    }

    #[test]
    fn test_probit_inverts_cdf() {
        for &z in &[-3.0, -1.5, -0.2, 0.0, 0.7, 2.5] {
            assert_relative_eq!(probit(normal_cdf(z)), z, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_linear_fit_exact() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 7.0];
        let fit = linear_fit(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.predict(10.0), 21.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_fit_least_squares() {
        // numpy.polyfit([1,2,3], [1,2,2], 1) = [0.5, 0.6667]
        let fit = linear_fit(&[1.0, 2.0, 3.0], &[1.0, 2.0, 2.0]).unwrap();
        assert_relative_eq!(fit.slope, 0.5, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_fit_degenerate() {
        assert!(linear_fit(&[1.0], &[2.0]).is_none());
        assert!(linear_fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn test_r2_score_perfect() {
        assert_relative_eq!(r2_score(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 1.0);
    }

    #[test]
    fn test_r2_score_reference() {
        // sklearn.metrics.r2_score([3, -0.5, 2, 7], [2.5, 0.0, 2, 8]) = 0.9486...
        let r2 = r2_score(&[3.0, -0.5, 2.0, 7.0], &[2.5, 0.0, 2.0, 8.0]);
        assert_relative_eq!(r2, 0.948_608_137_044_967_9, epsilon = 1e-12);
    }

    #[test]
    fn test_r2_score_constant_observations() {
        assert_eq!(r2_score(&[2.0, 2.0], &[2.0, 2.0]), 1.0);
        assert_eq!(r2_score(&[2.0, 2.0], &[2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_trapezoid_area_diagonal() {
        let x = [0.0, 0.5, 1.0];
        assert_relative_eq!(trapezoid_area(&x, &x), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_area_skips_non_finite() {
        let x = [0.0, f64::NAN, 1.0];
        let y = [0.0, 0.3, 1.0];
        assert_relative_eq!(trapezoid_area(&x, &y), 0.5, epsilon = 1e-12);
        assert_eq!(trapezoid_area(&[0.0], &[1.0]), 0.0);
    }
}
