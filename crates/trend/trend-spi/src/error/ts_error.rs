//! Time series error types
//!
//! Defines the reasons a trend model can fail.

use thiserror::Error;

/// Result type alias for model-level operations
pub type TsResult<T> = std::result::Result<T, TsError>;

/// Errors that can occur while fitting or evaluating a model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TsError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Convergence failure during optimization
    #[error("Optimization failed to converge after {iterations} iterations")]
    ConvergenceFailure { iterations: usize },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Invalid time series data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl TsError {
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        TsError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let error = TsError::InsufficientData {
            required: 4,
            actual: 3,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 4 points, got 3"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = TsError::invalid_parameter("degree", "must be <= 10");
        assert_eq!(error.to_string(), "Invalid parameter 'degree': must be <= 10");
    }

    #[test]
    fn test_not_fitted_display() {
        assert_eq!(
            TsError::NotFitted.to_string(),
            "Model must be fitted before prediction"
        );
    }

    #[test]
    fn test_convergence_failure_display() {
        let error = TsError::ConvergenceFailure { iterations: 500 };
        assert_eq!(
            error.to_string(),
            "Optimization failed to converge after 500 iterations"
        );
    }

    #[test]
    fn test_numerical_error_display() {
        let error = TsError::NumericalError("singular normal equations".to_string());
        assert_eq!(error.to_string(), "Numerical error: singular normal equations");
    }

    #[test]
    fn test_invalid_data_display() {
        let error = TsError::InvalidData("years must be strictly increasing".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid data: years must be strictly increasing"
        );
    }

    #[test]
    fn test_clone_and_eq() {
        let error = TsError::ConvergenceFailure { iterations: 10 };
        assert_eq!(error.clone(), error);
        assert_ne!(error, TsError::NotFitted);
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TsError>();
    }
}
