//! Forecaster-level error carrying the attempted model.

use thiserror::Error;

use super::TsError;
use crate::model::ModelSpec;

/// Result type alias for forecast requests
pub type Result<T> = std::result::Result<T, FitError>;

/// A model could not be fit or could not produce a forecast.
///
/// Carries the attempted [`ModelSpec`] so the caller can retry with a simpler
/// model (a lower polynomial degree, a smaller ARIMA order).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to fit {spec}: {reason}")]
pub struct FitError {
    pub spec: ModelSpec,
    #[source]
    pub reason: TsError,
}

impl FitError {
    pub fn new(spec: ModelSpec, reason: TsError) -> Self {
        Self { spec, reason }
    }

    /// Closure adapter for `map_err`.
    pub fn tagging(spec: ModelSpec) -> impl Fn(TsError) -> FitError {
        move |reason| FitError::new(spec, reason)
    }

    /// True when the series was too short for the requested model.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self.reason, TsError::InsufficientData { .. })
    }
}
