//! Risk evaluation error types.

use thiserror::Error;

/// Risk evaluation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    #[error("Invalid threshold: {name} - {reason}")]
    InvalidThreshold { name: String, reason: String },

    #[error("Observation for {year} has a non-finite value")]
    NonFiniteValue { year: i32 },
}

impl RiskError {
    pub fn invalid_threshold(name: &str, reason: impl Into<String>) -> Self {
        RiskError::InvalidThreshold {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for risk operations.
pub type Result<T> = std::result::Result<T, RiskError>;
