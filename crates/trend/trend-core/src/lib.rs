//! Trend Core
//!
//! Extrapolation models for short yearly series, and the forecaster that
//! fits them on demand:
//!
//! - [`regression`]: Polynomial, log-linear and ARIMA models
//! - [`TrendForecaster`]: fit a [`ModelSpec`] to a series and forecast a [`ForecastRequest`]
//!
//! ## Example
//!
//! ```rust
//! use trend_core::prelude::*;
//!
//! let years: Vec<i32> = (2001..=2023).collect();
//! let values: Vec<f64> = (0..23).map(|i| 64.0 - 0.4 * i as f64).collect();
//!
//! let mut model = LogLinearRegression::new();
//! model.fit(&years, &values).unwrap();
//! let forecast = model.predict_years(&[2030, 2040]).unwrap();
//! assert!(forecast.iter().all(|v| *v >= 0.0));
//! ```

mod forecaster;
mod linalg;
pub mod regression;
pub mod search;
mod validation;

pub use forecaster::TrendForecaster;

// Re-export from SPI and API
pub use trend_api::{ForecastRequest, SolverConfig};
pub use trend_spi::{FitError, ForecastPoint, ModelKind, ModelSpec, Result, TrendModel, TsError, TsResult};

pub use regression::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use trend_spi::TrendModel;
    pub use crate::regression::{Arima, LogLinearRegression, PolynomialRegression};
    pub use crate::TrendForecaster;
    pub use trend_api::{ForecastRequest, SolverConfig};
    pub use trend_spi::{FitError, ForecastPoint, ModelKind, ModelSpec, TsError};
}
