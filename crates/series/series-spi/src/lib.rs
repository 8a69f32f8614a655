//! Series Service Provider Interface
//!
//! Defines the observation model, error types and loader contract shared by
//! every component that reads a yearly glacier series.
//!
//! - [`Observation`]: one measurement for one year
//! - [`RawRow`]: an uncleaned row as handed over by a loader
//! - [`ObservationSource`]: the seam between file/HTTP loaders and the store
//! - [`SeriesError`]: load and query failures

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::ObservationSource;
pub use error::{Result, SeriesError, ValidationError};
pub use model::{Observation, RawRow, SeriesSummary, SourceRows};
