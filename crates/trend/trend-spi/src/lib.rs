//! Trend Service Provider Interface
//!
//! Defines core traits and error types for trend extrapolation models.
//!
//! - [`TrendModel`]: the fit/predict contract every model implements
//! - [`ModelSpec`] and [`ModelKind`]: which model, with which parameters
//! - [`ForecastPoint`]: one predicted value for one year
//! - [`TsError`]: why a model could not be fit or evaluated
//! - [`FitError`]: a [`TsError`] tagged with the attempted [`ModelSpec`]

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::TrendModel;
pub use error::{FitError, Result, TsError, TsResult};
pub use model::{ForecastPoint, ModelKind, ModelSpec};
