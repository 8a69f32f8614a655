//! Analysis session orchestration.

use rayon::prelude::*;
use report_facade::merge;
use risk_facade::evaluate;
use series_facade::{GlacierDataset, SeriesSummary, TimeSeriesStore};
use trend_facade::{ForecastRequest, ModelSpec, TrendForecaster};

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::outcome::{AnalysisReport, ModelRun, SeriesForecast};

/// One analysis session over a loaded dataset.
///
/// The dataset is read-only for the whole session; every model is fitted
/// against the same snapshot.
#[derive(Debug, Clone)]
pub struct GlacierAnalysis {
    dataset: GlacierDataset,
}

impl GlacierAnalysis {
    pub fn new(dataset: GlacierDataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &GlacierDataset {
        &self.dataset
    }

    /// Run every configured model and assemble the report.
    ///
    /// Fails only for an unusable config or an empty area series. A model
    /// that cannot be fitted is recorded in its [`ModelRun`] and logged.
    pub fn run(&self, config: &AnalysisConfig) -> Result<AnalysisReport> {
        config.validate()?;
        let forecaster = TrendForecaster::with_solver(config.solver);

        let area = forecast_series(&forecaster, &self.dataset.area, &config.models, &config.request)?;

        let latest = self.dataset.area.latest()?;
        let risk = evaluate(latest, self.dataset.area.previous(), &config.thresholds)?;

        let rows = merge(self.dataset.area.observations(), &area.all_points());

        // Elevation is not an area; the area floor does not apply.
        let elevation = match &self.dataset.elevation {
            Some(store) if config.forecast_elevation => {
                let request = config.request.clone().without_floor();
                Some(forecast_series(&forecaster, store, &config.models, &request)?)
            }
            _ => None,
        };

        tracing::info!(
            models = config.models.len(),
            failed = area.failures().count(),
            risk = %risk.level,
            "analysis complete"
        );

        Ok(AnalysisReport {
            area,
            risk,
            rows,
            elevation,
        })
    }
}

/// Fit every model against one series, in parallel.
///
/// Runs come back in the order of `models`.
pub fn forecast_series(
    forecaster: &TrendForecaster,
    store: &TimeSeriesStore,
    models: &[ModelSpec],
    request: &ForecastRequest,
) -> Result<SeriesForecast> {
    let summary: SeriesSummary = store.summary()?;
    let observations = store.observations();

    let models: Vec<ModelRun> = models
        .par_iter()
        .map(|spec| ModelRun {
            spec: *spec,
            result: forecaster.fit_and_predict(observations, spec, request),
        })
        .collect();

    for err in models.iter().filter_map(ModelRun::error) {
        tracing::warn!(model = %err.spec, error = %err.reason, "model fit failed");
    }

    Ok(SeriesForecast { summary, models })
}
