//! Trend Facade
//!
//! Unified re-exports for the trend forecasting module:
//! - `TrendModel`, `ModelSpec`, `ForecastPoint` and `FitError` from SPI
//! - `ForecastRequest` and `SolverConfig` from API
//! - Model implementations and `TrendForecaster` from Core

// Re-export everything from SPI
pub use trend_spi::*;

// Re-export everything from API
pub use trend_api::*;

// Re-export everything from Core
pub use trend_core::*;
