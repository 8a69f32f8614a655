//! Per-model results and the session report.

use report_facade::ReportRow;
use risk_facade::RiskAssessment;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use series_facade::SeriesSummary;
use trend_facade::{FitError, ForecastPoint, ModelKind, ModelSpec};

/// The outcome of fitting one model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRun {
    pub spec: ModelSpec,
    pub result: Result<Vec<ForecastPoint>, FitError>,
}

impl ModelRun {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn points(&self) -> &[ForecastPoint] {
        match &self.result {
            Ok(points) => points,
            Err(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&FitError> {
        self.result.as_ref().err()
    }
}

impl Serialize for ModelRun {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ModelRun", 4)?;
        state.serialize_field("model", &self.spec.kind())?;
        state.serialize_field("spec", &self.spec.describe())?;
        match &self.result {
            Ok(points) => {
                state.serialize_field("status", "ok")?;
                state.serialize_field("forecasts", points)?;
            }
            Err(err) => {
                state.serialize_field("status", "failed")?;
                state.serialize_field("error", &err.reason.to_string())?;
            }
        }
        state.end()
    }
}

/// Summary and model runs for one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesForecast {
    pub summary: SeriesSummary,
    pub models: Vec<ModelRun>,
}

impl SeriesForecast {
    /// Runs that produced forecasts.
    pub fn successful(&self) -> impl Iterator<Item = &ModelRun> {
        self.models.iter().filter(|r| r.is_ok())
    }

    /// Runs that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = &FitError> {
        self.models.iter().filter_map(ModelRun::error)
    }

    /// Forecasts of every successful run, in run order.
    pub fn all_points(&self) -> Vec<ForecastPoint> {
        self.models
            .iter()
            .flat_map(|r| r.points().iter().copied())
            .collect()
    }

    /// Forecasts of the first successful run of `kind`.
    pub fn points_for(&self, kind: ModelKind) -> Option<&[ForecastPoint]> {
        self.successful()
            .find(|r| r.spec.kind() == kind)
            .map(ModelRun::points)
    }
}

/// Everything one analysis session produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub area: SeriesForecast,
    pub risk: RiskAssessment,
    /// Observed area and every area forecast, merged.
    pub rows: Vec<ReportRow>,
    pub elevation: Option<SeriesForecast>,
}

impl AnalysisReport {
    pub fn successful(&self) -> impl Iterator<Item = &ModelRun> {
        self.area.successful()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FitError> {
        self.area.failures()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use series_facade::Observation;
    use trend_facade::TsError;

    fn summary() -> SeriesSummary {
        SeriesSummary::from_sorted(&[Observation::new(2001, 50.0), Observation::new(2020, 25.0)])
            .unwrap()
    }

    fn forecast() -> SeriesForecast {
        SeriesForecast {
            summary: summary(),
            models: vec![
                ModelRun {
                    spec: ModelSpec::polynomial(2),
                    result: Ok(vec![ForecastPoint::new(2030, 12.0, ModelKind::Polynomial)]),
                },
                ModelRun {
                    spec: ModelSpec::arima(1, 1, 1),
                    result: Err(FitError::new(
                        ModelSpec::arima(1, 1, 1),
                        TsError::InsufficientData {
                            required: 4,
                            actual: 2,
                        },
                    )),
                },
            ],
        }
    }

    #[test]
    fn test_partitions() {
        let f = forecast();
        assert_eq!(f.successful().count(), 1);
        assert_eq!(f.failures().count(), 1);
        assert_eq!(f.all_points().len(), 1);
        assert!(f.points_for(ModelKind::Polynomial).is_some());
        assert!(f.points_for(ModelKind::Arima).is_none());
    }

    #[test]
    fn test_model_run_json() {
        let f = forecast();
        let ok = serde_json::to_value(&f.models[0]).unwrap();
        assert_eq!(ok["status"], "ok");
        assert_eq!(ok["model"], "Polynomial");
        assert_eq!(ok["spec"], "Polynomial(degree=2)");
        assert_eq!(ok["forecasts"][0]["year"], 2030);

        let failed = serde_json::to_value(&f.models[1]).unwrap();
        assert_eq!(failed["status"], "failed");
        assert_eq!(failed["model"], "ARIMA");
        assert!(failed.get("forecasts").is_none());
        assert!(failed["error"].as_str().unwrap().contains("at least 4 points"));
    }

    #[test]
    fn test_series_forecast_json_nests_model_runs() {
        let json = serde_json::to_value(forecast()).unwrap();
        assert!(json.get("summary").is_some());
        let models = json["models"].as_array().unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0]["status"], "ok");
        assert_eq!(models[1]["status"], "failed");
    }
}
