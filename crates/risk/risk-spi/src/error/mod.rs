//! Error types for risk evaluation.

mod risk_error;

pub use risk_error::{Result, RiskError};
