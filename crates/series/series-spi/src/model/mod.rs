//! Data models for yearly series.

mod observation;
mod raw_row;
mod summary;

pub use observation::Observation;
pub use raw_row::{RawRow, SourceRows};
pub use summary::SeriesSummary;
