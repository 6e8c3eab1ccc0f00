//! Confidence band error types.

/// Errors that can occur while building a confidence band.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfidenceError {
    /// The confidence level is not strictly between 0 and 100 percent.
    #[error("confidence level must be in (0, 100) percent, got {percent}")]
    InvalidLevel { percent: f64 },

    /// Input sequences disagree on the number of lead times.
    #[error("{steps} steps but {real} real values and {rows} bootstrap rows")]
    LengthMismatch {
        steps: usize,
        real: usize,
        rows: usize,
    },

    /// There are no lead times to process.
    #[error("bootstrap table is empty")]
    EmptyTable,

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_display() {
        let err = ConfidenceError::InvalidLevel { percent: 120.0 };
        assert_eq!(
            err.to_string(),
            "confidence level must be in (0, 100) percent, got 120"
        );
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = ConfidenceError::LengthMismatch {
            steps: 3,
            real: 2,
            rows: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("3 steps"));
        assert!(msg.contains("2 real values"));
    }

    #[test]
    fn test_empty_table_display() {
        assert_eq!(
            ConfidenceError::EmptyTable.to_string(),
            "bootstrap table is empty"
        );
    }

    #[test]
    fn test_serialization_display() {
        let err = ConfidenceError::Serialization {
            reason: "invalid JSON".to_string(),
        };
        assert!(err.to_string().contains("serialization error"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<ConfidenceError>();
    }
}
