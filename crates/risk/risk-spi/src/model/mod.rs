//! Data models for risk evaluation.

mod risk_assessment;
mod risk_level;

pub use risk_assessment::RiskAssessment;
pub use risk_level::RiskLevel;
