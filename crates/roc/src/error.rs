//! Error types for the hyetos-roc crate.

/// Error type for all fallible operations in the hyetos-roc crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RocError {
    /// Returned when the paired sample holds no instances.
    #[error("paired sample is empty")]
    EmptySample,

    /// Returned when member counts and observation flags differ in length.
    #[error("length mismatch: {members} member counts, {observed} observations")]
    LengthMismatch {
        /// Number of ensemble member counts.
        members: usize,
        /// Number of observation flags.
        observed: usize,
    },

    /// Returned when a member count exceeds the ensemble size.
    #[error("member count {count} at index {index} exceeds ensemble size {total_members}")]
    MemberCountOutOfRange {
        /// Position of the offending instance.
        index: usize,
        /// The offending member count.
        count: u32,
        /// Ensemble size of the forecasting system.
        total_members: u32,
    },

    /// Returned when hit-rate and false-alarm-rate curves differ in length.
    #[error("curve length mismatch: {hit_rate} hit rates, {false_alarm_rate} false alarm rates")]
    CurveLengthMismatch {
        /// Number of hit-rate points.
        hit_rate: usize,
        /// Number of false-alarm-rate points.
        false_alarm_rate: usize,
    },

    /// Returned when fewer than two finite z-space pairs remain for the fit.
    #[error("insufficient data for binormal fit: {finite_pairs} finite z-space pair(s), need 2")]
    InsufficientFitData {
        /// Number of finite pairs that survived filtering.
        finite_pairs: usize,
    },

    /// Returned when the regression line is undefined.
    #[error("degenerate binormal fit: {reason}")]
    DegenerateFit {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
