//! Trend API
//!
//! Configuration types and builders for forecast requests.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use trend_spi::{FitError, ForecastPoint, ModelKind, ModelSpec, Result, TsError, TsResult};

/// First forecast year used by the dashboard's regression page.
pub const DEFAULT_FIRST_YEAR: i32 = 2025;
/// Last forecast year used by the dashboard's regression page.
pub const DEFAULT_HORIZON_YEAR: i32 = 2050;
/// Spacing of the dashboard's regression forecast years.
pub const DEFAULT_STEP: i32 = 5;
/// Longest span, in years, a request or an ARIMA path may cover.
pub const MAX_HORIZON_SPAN: i32 = 500;

// ============================================================================
// Forecast Request
// ============================================================================

/// Which future years to forecast and how to clamp the result.
///
/// Regression models are evaluated at exactly `years`. ARIMA forecasts every
/// year from the one after the last observation through [`horizon`](Self::horizon),
/// which is the caller's end year even when `years` stops short of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ForecastRequestDef")]
pub struct ForecastRequest {
    years: Vec<i32>,
    horizon: i32,
    floor: Option<f64>,
}

#[derive(Deserialize)]
struct ForecastRequestDef {
    years: Vec<i32>,
    #[serde(default)]
    horizon: Option<i32>,
    #[serde(default)]
    floor: Option<f64>,
}

impl TryFrom<ForecastRequestDef> for ForecastRequest {
    type Error = TsError;

    fn try_from(def: ForecastRequestDef) -> TsResult<Self> {
        let mut request = Self::years(def.years)?;
        if let Some(horizon) = def.horizon {
            request = request.with_horizon(horizon)?;
        }
        request.floor = def.floor;
        Ok(request)
    }
}

impl ForecastRequest {
    /// Explicit forecast years. Sorted and deduplicated.
    pub fn years(years: impl IntoIterator<Item = i32>) -> TsResult<Self> {
        let mut years: Vec<i32> = years.into_iter().collect();
        years.sort_unstable();
        years.dedup();

        if years.is_empty() {
            return Err(TsError::invalid_parameter(
                "years",
                "at least one forecast year is required",
            ));
        }

        let horizon = years[years.len() - 1];
        let span = i64::from(horizon) - i64::from(years[0]);
        if span > i64::from(MAX_HORIZON_SPAN) {
            return Err(TsError::invalid_parameter(
                "years",
                format!(
                    "requested years span {} years, at most {} allowed",
                    span, MAX_HORIZON_SPAN
                ),
            ));
        }

        Ok(Self {
            years,
            horizon,
            floor: None,
        })
    }

    /// Every `step` years from `from` through `to` inclusive.
    pub fn every(step: i32, from: i32, to: i32) -> TsResult<Self> {
        if step <= 0 {
            return Err(TsError::invalid_parameter("step", "must be positive"));
        }
        if to < from {
            return Err(TsError::invalid_parameter(
                "to",
                format!("horizon {} precedes first year {}", to, from),
            ));
        }
        if i64::from(to) - i64::from(from) > i64::from(MAX_HORIZON_SPAN) {
            return Err(TsError::invalid_parameter(
                "to",
                format!("horizon {} is more than {} years after {}", to, MAX_HORIZON_SPAN, from),
            ));
        }

        Self::years((from..=to).step_by(step as usize))?.with_horizon(to)
    }

    /// Every year from `from` through `to` inclusive.
    pub fn through(from: i32, to: i32) -> TsResult<Self> {
        Self::every(1, from, to)
    }

    /// Extend the ARIMA horizon past the last requested year.
    pub fn with_horizon(mut self, horizon: i32) -> TsResult<Self> {
        let last = self.years[self.years.len() - 1];
        if horizon < last {
            return Err(TsError::invalid_parameter(
                "horizon",
                format!("horizon {} precedes requested year {}", horizon, last),
            ));
        }
        if i64::from(horizon) - i64::from(self.years[0]) > i64::from(MAX_HORIZON_SPAN) {
            return Err(TsError::invalid_parameter(
                "horizon",
                format!("horizon {} is more than {} years out", horizon, MAX_HORIZON_SPAN),
            ));
        }
        self.horizon = horizon;
        Ok(self)
    }

    /// Clamp every prediction to at least `floor`.
    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = Some(floor);
        self
    }

    pub fn without_floor(mut self) -> Self {
        self.floor = None;
        self
    }

    /// Requested years, ascending.
    pub fn target_years(&self) -> &[i32] {
        &self.years
    }

    /// Last year of the ARIMA path.
    pub fn horizon(&self) -> i32 {
        self.horizon
    }

    pub fn floor(&self) -> Option<f64> {
        self.floor
    }

    /// Apply the floor, if any.
    pub fn clamp(&self, value: f64) -> f64 {
        match self.floor {
            Some(floor) => value.max(floor),
            None => value,
        }
    }
}

impl Default for ForecastRequest {
    /// 2025 through 2050 every five years, no floor.
    fn default() -> Self {
        Self {
            years: (DEFAULT_FIRST_YEAR..=DEFAULT_HORIZON_YEAR)
                .step_by(DEFAULT_STEP as usize)
                .collect(),
            horizon: DEFAULT_HORIZON_YEAR,
            floor: None,
        }
    }
}

// ============================================================================
// Solver Configuration
// ============================================================================

/// Iteration limits for models fitted by numerical optimisation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum search iterations before giving up (default: 2000).
    pub max_iterations: usize,
    /// Relative objective spread at which the search is considered converged (default: 1e-6).
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 2000,
            tolerance: 1e-6,
        }
    }
}

impl SolverConfig {
    pub fn new(max_iterations: usize, tolerance: f64) -> Self {
        Self {
            max_iterations,
            tolerance,
        }
    }

    pub fn validate(&self) -> TsResult<()> {
        if self.max_iterations == 0 {
            return Err(TsError::invalid_parameter("max_iterations", "must be positive"));
        }
        if !(self.tolerance > 0.0 && self.tolerance < 1.0) {
            return Err(TsError::invalid_parameter("tolerance", "must be in (0, 1)"));
        }
        Ok(())
    }
}
