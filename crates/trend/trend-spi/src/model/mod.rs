//! Forecast data models.

mod forecast_point;
mod model_spec;

pub use forecast_point::ForecastPoint;
pub use model_spec::{ModelKind, ModelSpec};
