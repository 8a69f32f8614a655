//! Series Core
//!
//! Implementations for loading and holding yearly glacier series:
//!
//! - [`TimeSeriesStore`]: validated, deduplicated, year-ordered observations
//! - [`CsvObservationSource`]: reads a header-mapped CSV table
//! - [`GlacierDataset`]: area series plus the optional elevation series

mod csv_source;
mod dataset;
mod store;

pub use csv_source::CsvObservationSource;
pub use dataset::GlacierDataset;
pub use store::{LoadReport, TimeSeriesStore};

// Re-export from SPI
pub use series_spi::{ObservationSource, Observation, RawRow, Result, SeriesError, ValidationError};
