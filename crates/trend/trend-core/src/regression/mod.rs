//! Trend models for yearly series
//!
//! ## Algorithms
//!
//! - **Polynomial Regression**: least squares in the year
//! - **Log-Linear Regression**: exponential trend fitted in log space
//! - **ARIMA**: AutoRegressive Integrated Moving Average over the value sequence

pub mod arima;
pub mod log_linear;
pub mod polynomial;

pub use arima::Arima;
pub use log_linear::LogLinearRegression;
pub use polynomial::PolynomialRegression;
