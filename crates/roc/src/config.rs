//! Binormal fit configuration.

use crate::error::RocError;

/// Sampling grid of the false-alarm z-score axis used to draw the binormal
/// curve: `z_min, z_min + z_step, ...` strictly below `z_max`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinormalConfig {
    z_min: f64,
    z_max: f64,
    z_step: f64,
}

impl Default for BinormalConfig {
    fn default() -> Self {
        Self {
            z_min: -10.0,
            z_max: 10.0,
            z_step: 0.1,
        }
    }
}

impl BinormalConfig {
    /// Set the z-score range `[z_min, z_max)`.
    pub fn with_z_range(mut self, z_min: f64, z_max: f64) -> Self {
        self.z_min = z_min;
        self.z_max = z_max;
        self
    }

    /// Set the z-score sampling step.
    pub fn with_z_step(mut self, z_step: f64) -> Self {
        self.z_step = z_step;
        self
    }

    /// Returns the lower (inclusive) end of the grid.
    pub fn z_min(&self) -> f64 {
        self.z_min
    }

    /// Returns the upper (exclusive) end of the grid.
    pub fn z_max(&self) -> f64 {
        self.z_max
    }

    /// Returns the grid step.
    pub fn z_step(&self) -> f64 {
        self.z_step
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RocError::InvalidConfig`] if a bound is not finite, the
    /// range is empty, or the step is not positive.
    pub fn validate(&self) -> Result<(), RocError> {
        if !self.z_min.is_finite() || !self.z_max.is_finite() {
            return Err(RocError::InvalidConfig {
                reason: format!(
                    "z range must be finite, got [{}, {})",
                    self.z_min, self.z_max
                ),
            });
        }
        if self.z_min >= self.z_max {
            return Err(RocError::InvalidConfig {
                reason: format!(
                    "z_min ({}) must be less than z_max ({})",
                    self.z_min, self.z_max
                ),
            });
        }
        if !(self.z_step.is_finite() && self.z_step > 0.0) {
            return Err(RocError::InvalidConfig {
                reason: format!("z_step must be positive, got {}", self.z_step),
            });
        }
        Ok(())
    }

    /// The sampled z-scores, `ceil((z_max - z_min) / z_step)` of them.
    pub fn grid(&self) -> Vec<f64> {
        let n = ((self.z_max - self.z_min) / self.z_step).ceil() as usize;
        (0..n)
            .map(|i| self.z_min + i as f64 * self.z_step)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let config = BinormalConfig::default();
        assert!(config.validate().is_ok());
        let grid = config.grid();
        assert_eq!(grid.len(), 200);
        assert_eq!(grid[0], -10.0);
        assert!((grid[199] - 9.9).abs() < 1e-12);
        assert!(grid.iter().all(|&z| z < 10.0));
    }

    #[test]
    fn test_builder_methods() {
        let config = BinormalConfig::default()
            .with_z_range(-5.0, 5.0)
            .with_z_step(0.5);
        assert_eq!(config.z_min(), -5.0);
        assert_eq!(config.z_max(), 5.0);
        assert_eq!(config.z_step(), 0.5);
        assert_eq!(config.grid().len(), 20);
    }

    #[test]
    fn test_invalid_step() {
        let config = BinormalConfig::default().with_z_step(0.0);
        assert!(matches!(
            config.validate(),
            Err(RocError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_invalid_range() {
        let config = BinormalConfig::default().with_z_range(1.0, -1.0);
        assert!(config.validate().is_err());
        let config = BinormalConfig::default().with_z_range(f64::NEG_INFINITY, 1.0);
        assert!(config.validate().is_err());
    }
}
