//! Report Service Provider Interface
//!
//! Defines the labelled row handed to presentation and export layers.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::ReportSink;
pub use error::{ReportError, Result};
pub use model::{label_rank, ReportRow, OBSERVED_LABEL};
