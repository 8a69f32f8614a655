//! Session-level errors.

use risk_facade::RiskError;
use series_facade::SeriesError;
use thiserror::Error;

/// Failures that stop a whole analysis session.
///
/// A single model failing is not one of them; see [`ModelRun`](crate::ModelRun).
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Risk(#[from] RiskError),

    #[error("Invalid analysis config: {0}")]
    Config(String),
}

/// Result type for analysis sessions.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_transparent() {
        let err: AnalysisError = SeriesError::EmptySeries.into();
        assert_eq!(err.to_string(), "Series is empty");

        let err = AnalysisError::Config("no models configured".to_string());
        assert_eq!(err.to_string(), "Invalid analysis config: no models configured");
    }
}
