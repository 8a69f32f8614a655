//! Risk Core
//!
//! Threshold classification of the latest observation.

mod evaluator;

pub use evaluator::*;

// Re-export from SPI and API
pub use risk_api::RiskThresholds;
pub use risk_spi::{Result, RiskAssessment, RiskError, RiskLevel, RiskPolicy};
