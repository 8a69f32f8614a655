//! Analysis session configuration.

use std::path::Path;

use risk_facade::RiskThresholds;
use serde::{Deserialize, Serialize};
use series_facade::DatasetConfig;
use trend_facade::{ForecastRequest, ModelSpec, SolverConfig};

use crate::error::{AnalysisError, Result};

/// Everything one analysis session needs besides the data.
///
/// Every field has a default, so `{}` is a valid JSON config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default = "default_models")]
    pub models: Vec<ModelSpec>,
    #[serde(default = "default_request")]
    pub request: ForecastRequest,
    #[serde(default)]
    pub thresholds: RiskThresholds,
    #[serde(default)]
    pub solver: SolverConfig,
    /// Also forecast the elevation series, when the dataset has one.
    #[serde(default = "default_true")]
    pub forecast_elevation: bool,
}

fn default_models() -> Vec<ModelSpec> {
    vec![
        ModelSpec::polynomial(2),
        ModelSpec::log_linear(),
        ModelSpec::arima(1, 1, 1),
    ]
}

fn default_request() -> ForecastRequest {
    ForecastRequest::default().with_floor(0.0)
}

fn default_true() -> bool {
    true
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            models: default_models(),
            request: default_request(),
            thresholds: RiskThresholds::default(),
            solver: SolverConfig::default(),
            forecast_elevation: true,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AnalysisError::Config(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn with_models(mut self, models: Vec<ModelSpec>) -> Self {
        self.models = models;
        self
    }

    pub fn with_request(mut self, request: ForecastRequest) -> Self {
        self.request = request;
        self
    }

    pub fn with_thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Reject configs that cannot run at all.
    pub fn validate(&self) -> Result<()> {
        if self.models.is_empty() {
            return Err(AnalysisError::Config("no models configured".to_string()));
        }
        self.solver
            .validate()
            .map_err(|e| AnalysisError::Config(e.to_string()))?;
        self.thresholds.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.models.len(), 3);
        assert_eq!(config.request.floor(), Some(0.0));
        assert_eq!(config.request.horizon(), 2050);
        assert!(config.forecast_elevation);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(AnalysisConfig::from_json("{}").unwrap(), AnalysisConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "models": [{"model": "arima", "p": 2, "d": 1, "q": 0}],
            "request": {"years": [2040, 2030]},
            "thresholds": {"critical": 30.0, "rapid_loss": 20.0},
            "forecast_elevation": false
        }"#;
        let config = AnalysisConfig::from_json(json).unwrap();

        assert_eq!(config.models, vec![ModelSpec::arima(2, 1, 0)]);
        assert_eq!(config.request.target_years(), &[2030, 2040]);
        assert_eq!(config.request.floor(), None);
        assert_eq!(config.thresholds.critical, 30.0);
        assert_eq!(config.thresholds.warning_margin, 5.0);
        assert!(!config.forecast_elevation);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = AnalysisConfig::from_json(r#"{"request": {"years": []}}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }

    #[test]
    fn test_validate() {
        let empty = AnalysisConfig::default().with_models(Vec::new());
        assert!(matches!(empty.validate(), Err(AnalysisError::Config(_))));

        let bad_thresholds =
            AnalysisConfig::default().with_thresholds(RiskThresholds::new(20.0, -1.0));
        assert!(matches!(bad_thresholds.validate(), Err(AnalysisError::Risk(_))));
    }
}
