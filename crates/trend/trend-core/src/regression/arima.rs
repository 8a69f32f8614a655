//! ARIMA (AutoRegressive Integrated Moving Average) implementation
//!
//! The model combines three components over the value sequence (years only
//! anchor the forecast horizon):
//!
//! - **AR (AutoRegressive)**: Uses past values to predict future values
//! - **I (Integrated)**: Differencing to achieve stationarity
//! - **MA (Moving Average)**: Uses past forecast errors
//!
//! ## Parameters
//!
//! - `p`: Order of the autoregressive part
//! - `d`: Degree of differencing
//! - `q`: Order of the moving average part
//!
//! ## Estimation
//!
//! AR coefficients start from the Yule-Walker solution and MA coefficients
//! from the residual autocorrelation. Both are then refined by minimising the
//! conditional sum of squares with a bounded Nelder-Mead search. For `d = 0`
//! the mean is profiled out as the sample mean and is not searched;
//! differenced models carry no drift.
//!
//! ## Example
//!
//! ```rust
//! use trend_core::regression::Arima;
//! use trend_core::TrendModel;
//!
//! let years: Vec<i32> = (2001..=2023).collect();
//! let values: Vec<f64> = (0..23).map(|i| 64.0 - 0.4 * i as f64 + 0.3 * (i as f64).sin()).collect();
//!
//! let mut model = Arima::new(1, 1, 1).unwrap();
//! model.fit(&years, &values).unwrap();
//! let forecast = model.forecast(5).unwrap();
//! assert_eq!(forecast.len(), 5);
//! ```

use serde::{Deserialize, Serialize};
use trend_api::{SolverConfig, MAX_HORIZON_SPAN};
use trend_spi::{ModelKind, TrendModel, TsError, TsResult};

use crate::search::nelder_mead;
use crate::validation::check_series;

/// Bound on every AR and MA coefficient during estimation.
const COEFF_BOUND: f64 = 0.99;
/// Initial search step for AR and MA coefficients.
const COEFF_STEP: f64 = 0.1;

/// ARIMA model for yearly series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arima {
    /// AR order (p)
    p: usize,
    /// Differencing order (d)
    d: usize,
    /// MA order (q)
    q: usize,
    /// AR coefficients
    ar_coeffs: Vec<f64>,
    /// MA coefficients
    ma_coeffs: Vec<f64>,
    /// Mean of the differenced series (zero when d > 0)
    constant: f64,
    /// Last value of the series at each differencing level, for undifferencing
    tails: Vec<f64>,
    /// Differenced data
    differenced_data: Vec<f64>,
    /// Residuals from fitting
    residuals: Vec<f64>,
    /// Conditional sum of squares at the fitted parameters
    css: f64,
    /// Search iterations used by the last fit
    iterations: usize,
    /// Year of the last observation
    last_year: i32,
    /// Search limits
    solver: SolverConfig,
    /// Whether the model has been fitted
    fitted: bool,
}

impl Arima {
    /// Create a new ARIMA model with specified orders
    ///
    /// # Arguments
    ///
    /// * `p` - Order of autoregressive component (0-10)
    /// * `d` - Degree of differencing (0-2)
    /// * `q` - Order of moving average component (0-10)
    pub fn new(p: usize, d: usize, q: usize) -> TsResult<Self> {
        if p > 10 {
            return Err(TsError::invalid_parameter("p", "AR order must be <= 10"));
        }
        if d > 2 {
            return Err(TsError::invalid_parameter("d", "Differencing order must be <= 2"));
        }
        if q > 10 {
            return Err(TsError::invalid_parameter("q", "MA order must be <= 10"));
        }

        Ok(Self {
            p,
            d,
            q,
            ar_coeffs: vec![0.0; p],
            ma_coeffs: vec![0.0; q],
            constant: 0.0,
            tails: Vec::new(),
            differenced_data: Vec::new(),
            residuals: Vec::new(),
            css: 0.0,
            iterations: 0,
            last_year: 0,
            solver: SolverConfig::default(),
            fitted: false,
        })
    }

    /// Replace the search limits.
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Smallest series length this order can be fit on.
    pub fn min_observations(&self) -> usize {
        (self.p + self.d + self.q + 1).max(2)
    }

    /// Get model parameters
    pub fn params(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// Get AR coefficients
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coeffs
    }

    /// Get MA coefficients
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma_coeffs
    }

    /// Conditional sum of squares at the fitted parameters
    pub fn css(&self) -> f64 {
        self.css
    }

    /// Search iterations used by the last fit
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    fn includes_constant(&self) -> bool {
        self.d == 0
    }

    /// Difference `d` times, remembering the last value at each level.
    fn difference(data: &[f64], order: usize) -> (Vec<f64>, Vec<f64>) {
        let mut result = data.to_vec();
        let mut tails = Vec::with_capacity(order);
        for _ in 0..order {
            tails.push(result[result.len() - 1]);
            result = result.windows(2).map(|w| w[1] - w[0]).collect();
        }
        (result, tails)
    }

    /// Reverse differencing to get original scale
    fn undifference(&self, forecasts: &[f64]) -> Vec<f64> {
        let mut result = forecasts.to_vec();
        for &tail in self.tails.iter().rev() {
            let mut level = tail;
            result = result
                .iter()
                .map(|&step| {
                    level += step;
                    level
                })
                .collect();
        }
        result
    }

    /// Estimate AR coefficients using Yule-Walker equations
    fn estimate_ar_coefficients(&self, data: &[f64]) -> Vec<f64> {
        if self.p == 0 {
            return Vec::new();
        }

        let n = data.len();
        let mean: f64 = data.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = data.iter().map(|x| x - mean).collect();

        // Compute autocorrelations
        let mut autocorr = vec![0.0; self.p + 1];
        for (k, slot) in autocorr.iter_mut().enumerate() {
            let mut sum = 0.0;
            for i in k..n {
                sum += centered[i] * centered[i - k];
            }
            *slot = sum / n as f64;
        }

        // Solve Yule-Walker using Levinson-Durbin
        let mut coeffs = vec![0.0; self.p];
        if autocorr[0].abs() > 1e-10 {
            coeffs[0] = autocorr[1] / autocorr[0];

            for k in 1..self.p {
                let mut sum = autocorr[k + 1];
                for j in 0..k {
                    sum -= coeffs[j] * autocorr[k - j];
                }

                let mut denom = autocorr[0];
                for j in 0..k {
                    denom -= coeffs[j] * autocorr[j + 1];
                }

                if denom.abs() > 1e-10 {
                    let new_coeff = sum / denom;
                    let old_coeffs = coeffs.clone();
                    coeffs[k] = new_coeff;
                    for j in 0..k {
                        coeffs[j] = old_coeffs[j] - new_coeff * old_coeffs[k - 1 - j];
                    }
                }
            }
        }

        coeffs
            .into_iter()
            .map(|c| c.clamp(-COEFF_BOUND, COEFF_BOUND))
            .collect()
    }

    /// Estimate MA coefficients from residuals
    fn estimate_ma_coefficients(&self, residuals: &[f64]) -> Vec<f64> {
        if self.q == 0 || residuals.is_empty() {
            return vec![0.0; self.q];
        }

        let n = residuals.len();
        let mean: f64 = residuals.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = residuals.iter().map(|x| x - mean).collect();

        let mut coeffs = vec![0.0; self.q];
        let var: f64 = centered.iter().map(|x| x * x).sum::<f64>() / n as f64;

        if var.abs() > 1e-10 {
            for (k, coeff) in coeffs.iter_mut().enumerate() {
                let mut sum = 0.0;
                for i in (k + 1)..n {
                    sum += centered[i] * centered[i - k - 1];
                }
                *coeff = ((sum / n as f64) / var).clamp(-COEFF_BOUND, COEFF_BOUND);
            }
        }

        coeffs
    }

    /// One-step-ahead residuals and their sum of squares.
    ///
    /// Residuals before index `p` are taken as zero.
    fn conditional_residuals(
        data: &[f64],
        constant: f64,
        ar: &[f64],
        ma: &[f64],
    ) -> (Vec<f64>, f64) {
        let n = data.len();
        let p = ar.len();
        let mut residuals = vec![0.0; n];
        let mut sum_sq = 0.0;

        for t in p..n {
            let mut prediction = constant;
            for (j, phi) in ar.iter().enumerate() {
                prediction += phi * (data[t - j - 1] - constant);
            }
            for (j, theta) in ma.iter().enumerate() {
                if t > j {
                    prediction += theta * residuals[t - j - 1];
                }
            }
            residuals[t] = data[t] - prediction;
            sum_sq += residuals[t] * residuals[t];
        }

        (residuals, sum_sq)
    }

    /// Split a search vector into (AR, MA).
    fn unpack<'a>(&self, params: &'a [f64]) -> (&'a [f64], &'a [f64]) {
        params.split_at(self.p)
    }

    /// Forecast the next `steps` values after the last observation.
    pub fn forecast(&self, steps: usize) -> TsResult<Vec<f64>> {
        if !self.fitted {
            return Err(TsError::NotFitted);
        }

        if steps == 0 {
            return Ok(Vec::new());
        }

        let n = self.differenced_data.len();
        let mut extended = self.differenced_data.clone();
        let mut extended_residuals = self.residuals.clone();

        // Generate forecasts on differenced scale
        for _ in 0..steps {
            let mut forecast = self.constant;

            // AR component
            for j in 0..self.p {
                let idx = extended.len() - j - 1;
                forecast += self.ar_coeffs[j] * (extended[idx] - self.constant);
            }

            // MA component
            for j in 0..self.q {
                if extended_residuals.len() > j {
                    let idx = extended_residuals.len() - j - 1;
                    forecast += self.ma_coeffs[j] * extended_residuals[idx];
                }
            }

            extended.push(forecast);
            extended_residuals.push(0.0); // Future residuals are 0
        }

        // Extract forecasts and undifference
        let forecasts: Vec<f64> = extended[n..].to_vec();
        Ok(self.undifference(&forecasts))
    }
}

impl TrendModel for Arima {
    fn fit(&mut self, years: &[i32], values: &[f64]) -> TsResult<()> {
        self.fitted = false;
        check_series(years, values, self.min_observations())?;

        let (differenced, tails) = Self::difference(values, self.d);
        let constant = if self.includes_constant() {
            differenced.iter().sum::<f64>() / differenced.len() as f64
        } else {
            0.0
        };

        // Starting point: Yule-Walker AR, then MA from the AR residuals
        let ar_start = self.estimate_ar_coefficients(&differenced);
        let (ar_residuals, _) = Self::conditional_residuals(&differenced, constant, &ar_start, &[]);
        let ma_start = self.estimate_ma_coefficients(&ar_residuals[self.p..]);

        let start: Vec<f64> = ar_start.iter().chain(&ma_start).copied().collect();
        let steps = vec![COEFF_STEP; start.len()];
        let bounds = vec![(-COEFF_BOUND, COEFF_BOUND); start.len()];

        let outcome = nelder_mead(
            |params| {
                let (ar, ma) = self.unpack(params);
                Self::conditional_residuals(&differenced, constant, ar, ma).1
            },
            &start,
            &steps,
            &bounds,
            &self.solver,
        )?;

        let (ar, ma) = self.unpack(&outcome.point);
        let (ar, ma) = (ar.to_vec(), ma.to_vec());
        let (residuals, css) = Self::conditional_residuals(&differenced, constant, &ar, &ma);

        if !css.is_finite() || ar.iter().chain(&ma).any(|c| !c.is_finite()) {
            return Err(TsError::NumericalError(
                "ARIMA parameters are not finite".to_string(),
            ));
        }

        tracing::debug!(
            p = self.p,
            d = self.d,
            q = self.q,
            iterations = outcome.iterations,
            css,
            "fitted ARIMA"
        );

        self.constant = constant;
        self.ar_coeffs = ar;
        self.ma_coeffs = ma;
        self.tails = tails;
        self.differenced_data = differenced;
        self.residuals = residuals;
        self.css = css;
        self.iterations = outcome.iterations;
        self.last_year = years[years.len() - 1];
        self.fitted = true;
        Ok(())
    }

    fn predict_years(&self, years: &[i32]) -> TsResult<Vec<f64>> {
        if !self.fitted {
            return Err(TsError::NotFitted);
        }

        if let Some(&year) = years.iter().find(|&&y| y <= self.last_year) {
            return Err(TsError::invalid_parameter(
                "years",
                format!(
                    "ARIMA forecasts only after the last observed year {}, got {}",
                    self.last_year, year
                ),
            ));
        }

        let horizon = match years.iter().max() {
            Some(&max) => max,
            None => return Ok(Vec::new()),
        };
        let span = i64::from(horizon) - i64::from(self.last_year);
        if span > i64::from(MAX_HORIZON_SPAN) {
            return Err(TsError::invalid_parameter(
                "years",
                format!(
                    "ARIMA forecasts at most {} years past {}, got {}",
                    MAX_HORIZON_SPAN, self.last_year, horizon
                ),
            ));
        }
        let path = self.forecast(span as usize)?;

        Ok(years
            .iter()
            .map(|&y| path[(y - self.last_year - 1) as usize])
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }

    fn kind(&self) -> ModelKind {
        ModelKind::Arima
    }
}
