//! Log-linear (exponential) trend
//!
//! Regresses `ln(max(value, 1.0))` on the year by ordinary least squares and
//! forecasts `exp(prediction)`, clipped at zero. This models steady
//! proportional shrinkage or growth, which a polynomial cannot.
//!
//! ## When to Use
//!
//! - Values decay towards zero rather than along a straight line
//! - Long horizons where a quadratic would turn negative

use serde::{Deserialize, Serialize};
use trend_spi::{ModelKind, TrendModel, TsError, TsResult};

use crate::validation::check_series;

/// Values below this are raised to it before taking the logarithm.
pub const LOG_FLOOR: f64 = 1.0;

/// Exponential trend fitted in log space.
///
/// # Example
///
/// ```rust
/// use trend_core::regression::LogLinearRegression;
/// use trend_core::TrendModel;
///
/// let mut model = LogLinearRegression::new();
/// model.fit(&[2000, 2010, 2020], &[80.0, 40.0, 20.0]).unwrap();
///
/// let at_2030 = model.predict_at(2030).unwrap();
/// assert!((at_2030 - 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogLinearRegression {
    /// Log-space value at `center`
    intercept: f64,
    /// Log-space change per year
    slope: f64,
    /// Mean of the fitted years
    center: f64,
    /// R-squared in log space
    r_squared: f64,
    /// Whether model has been fitted
    fitted: bool,
}

impl Default for LogLinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LogLinearRegression {
    /// Create a new unfitted model
    pub fn new() -> Self {
        Self {
            intercept: 0.0,
            slope: 0.0,
            center: 0.0,
            r_squared: 0.0,
            fitted: false,
        }
    }

    /// Log-space slope; `exp(slope) - 1` is the yearly proportional change.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Yearly proportional change, e.g. `-0.02` for 2 % shrinkage per year.
    pub fn annual_rate(&self) -> f64 {
        self.slope.exp() - 1.0
    }

    /// Get R-squared of the log-space fit
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    fn log_prediction(&self, year: i32) -> f64 {
        self.intercept + self.slope * (year as f64 - self.center)
    }

    /// Predict the value at a single year
    pub fn predict_at(&self, year: i32) -> TsResult<f64> {
        if !self.fitted {
            return Err(TsError::NotFitted);
        }
        Ok(self.log_prediction(year).exp().max(0.0))
    }
}

impl TrendModel for LogLinearRegression {
    fn fit(&mut self, years: &[i32], values: &[f64]) -> TsResult<()> {
        self.fitted = false;
        check_series(years, values, 2)?;

        let n = years.len() as f64;
        let logs: Vec<f64> = values.iter().map(|&v| v.max(LOG_FLOOR).ln()).collect();

        self.center = years.iter().map(|&y| y as f64).sum::<f64>() / n;
        let mean_log = logs.iter().sum::<f64>() / n;

        // OLS on centred years
        let sum_tt: f64 = years
            .iter()
            .map(|&y| (y as f64 - self.center).powi(2))
            .sum();
        if sum_tt.abs() < 1e-10 {
            return Err(TsError::NumericalError(
                "Singular matrix in regression".to_string(),
            ));
        }
        let sum_ty: f64 = years
            .iter()
            .zip(&logs)
            .map(|(&y, &l)| (y as f64 - self.center) * (l - mean_log))
            .sum();

        self.slope = sum_ty / sum_tt;
        self.intercept = mean_log;

        let ss_tot: f64 = logs.iter().map(|&l| (l - mean_log).powi(2)).sum();
        let ss_res: f64 = years
            .iter()
            .zip(&logs)
            .map(|(&y, &l)| (l - self.log_prediction(y)).powi(2))
            .sum();

        self.r_squared = if ss_tot > 1e-10 {
            1.0 - ss_res / ss_tot
        } else {
            1.0
        };

        self.fitted = true;
        Ok(())
    }

    fn predict_years(&self, years: &[i32]) -> TsResult<Vec<f64>> {
        years.iter().map(|&year| self.predict_at(year)).collect()
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }

    fn kind(&self) -> ModelKind {
        ModelKind::LogLinear
    }
}
