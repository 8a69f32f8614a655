//! # trend
//!
//! Trend forecasting: polynomial, log-linear and ARIMA models behind one forecaster.

pub use trend_facade::*;
