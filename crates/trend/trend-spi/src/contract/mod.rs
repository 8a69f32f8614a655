//! Trait contracts for trend models.

mod trend_model;

pub use trend_model::TrendModel;
