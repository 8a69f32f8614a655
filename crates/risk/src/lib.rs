//! # risk
//!
//! Risk evaluation of the latest observation against area thresholds.

pub use risk_facade::*;
