//! A single predicted value.

use serde::{Deserialize, Serialize};

use super::ModelKind;

/// One point forecast. Produced per request and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub year: i32,
    pub predicted_value: f64,
    pub model: ModelKind,
}

impl ForecastPoint {
    pub fn new(year: i32, predicted_value: f64, model: ModelKind) -> Self {
        Self {
            year,
            predicted_value,
            model,
        }
    }
}
