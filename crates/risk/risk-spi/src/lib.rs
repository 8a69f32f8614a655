//! Risk Service Provider Interface
//!
//! Defines traits and types for classifying the latest glacier observation.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::RiskPolicy;
pub use error::{Result, RiskError};
pub use model::{RiskAssessment, RiskLevel};
