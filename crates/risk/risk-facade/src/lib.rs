//! Risk Facade
//!
//! Unified re-exports for the risk module:
//! - `RiskPolicy`, `RiskLevel` and `RiskAssessment` from SPI
//! - `RiskThresholds` from API
//! - `evaluate` and `RiskEvaluator` from Core

// Re-export everything from SPI
pub use risk_spi::*;

// Re-export everything from API
pub use risk_api::*;

// Re-export everything from Core
pub use risk_core::*;
