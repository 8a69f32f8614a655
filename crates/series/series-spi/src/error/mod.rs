//! Error types for series loading and queries.

mod series_error;

pub use series_error::{Result, SeriesError, ValidationError};
