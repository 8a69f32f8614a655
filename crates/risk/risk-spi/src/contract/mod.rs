//! Contracts for risk classification.

mod risk_policy;

pub use risk_policy::RiskPolicy;
