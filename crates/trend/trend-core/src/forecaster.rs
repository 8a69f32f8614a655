//! Fit-and-predict entry point for every model kind.

use series_spi::Observation;
use trend_api::{ForecastRequest, SolverConfig, MAX_HORIZON_SPAN};
use trend_spi::{FitError, ForecastPoint, ModelKind, ModelSpec, Result, TrendModel, TsError};

use crate::regression::{Arima, LogLinearRegression, PolynomialRegression};
use crate::validation::check_finite;

/// Fits one model per request against a read-only series.
///
/// Holds no series state, so one forecaster can serve any number of
/// independent requests, including concurrently.
///
/// # Example
///
/// ```rust
/// use series_spi::Observation;
/// use trend_api::ForecastRequest;
/// use trend_core::{ModelSpec, TrendForecaster};
///
/// let series = vec![
///     Observation::new(2001, 50.0),
///     Observation::new(2010, 40.0),
///     Observation::new(2020, 25.0),
/// ];
/// let request = ForecastRequest::years(vec![2030]).unwrap();
///
/// let points = TrendForecaster::new()
///     .fit_and_predict(&series, &ModelSpec::polynomial(2), &request)
///     .unwrap();
/// assert_eq!(points.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendForecaster {
    solver: SolverConfig,
}

impl TrendForecaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits for iteratively fitted models (ARIMA).
    pub fn with_solver(solver: SolverConfig) -> Self {
        Self { solver }
    }

    pub fn solver(&self) -> &SolverConfig {
        &self.solver
    }

    /// Build an unfitted model for a spec.
    pub fn build(&self, spec: &ModelSpec) -> Result<Box<dyn TrendModel>> {
        let tag = FitError::tagging(*spec);
        let model: Box<dyn TrendModel> = match *spec {
            ModelSpec::Polynomial { degree } => {
                Box::new(PolynomialRegression::new(degree).map_err(tag)?)
            }
            ModelSpec::LogLinear => Box::new(LogLinearRegression::new()),
            ModelSpec::Arima { p, d, q } => {
                Box::new(Arima::new(p, d, q).map_err(tag)?.with_solver(self.solver))
            }
        };
        Ok(model)
    }

    /// Fit `spec` to `series` and forecast the requested years.
    ///
    /// Polynomial and LogLinear are evaluated at exactly the requested
    /// years, which may include observed years. ARIMA forecasts every year
    /// from the one after the last observation through the request horizon.
    /// The request floor, if any, clamps every prediction.
    pub fn fit_and_predict(
        &self,
        series: &[Observation],
        spec: &ModelSpec,
        request: &ForecastRequest,
    ) -> Result<Vec<ForecastPoint>> {
        let tag = FitError::tagging(*spec);

        let years: Vec<i32> = series.iter().map(|o| o.year).collect();
        let values: Vec<f64> = series.iter().map(|o| o.value).collect();

        let mut model = self.build(spec)?;
        model.fit(&years, &values).map_err(&tag)?;

        let targets = match spec.kind() {
            ModelKind::Arima => Self::arima_years(&years, request).map_err(&tag)?,
            ModelKind::Polynomial | ModelKind::LogLinear => request.target_years().to_vec(),
        };

        let predictions = model.predict_years(&targets).map_err(&tag)?;
        check_finite(&predictions).map_err(&tag)?;

        tracing::debug!(
            model = %spec,
            observations = series.len(),
            points = targets.len(),
            "forecast complete"
        );

        Ok(targets
            .into_iter()
            .zip(predictions)
            .map(|(year, value)| ForecastPoint::new(year, request.clamp(value), spec.kind()))
            .collect())
    }

    /// `last + 1 ..= horizon`, the ARIMA step years.
    fn arima_years(years: &[i32], request: &ForecastRequest) -> std::result::Result<Vec<i32>, TsError> {
        let last = years[years.len() - 1];
        let horizon = request.horizon();
        if horizon <= last {
            return Err(TsError::invalid_parameter(
                "horizon",
                format!(
                    "horizon year {} must be after the last observed year {}",
                    horizon, last
                ),
            ));
        }
        if i64::from(horizon) - i64::from(last) > i64::from(MAX_HORIZON_SPAN) {
            return Err(TsError::invalid_parameter(
                "horizon",
                format!(
                    "horizon year {} is more than {} years after the last observed year {}",
                    horizon, MAX_HORIZON_SPAN, last
                ),
            ));
        }
        Ok(((last + 1)..=horizon).collect())
    }
}
