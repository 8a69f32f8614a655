//! Series Facade
//!
//! Unified re-exports for the series module:
//! - `Observation`, `RawRow`, `SeriesError` and the `ObservationSource` contract from SPI
//! - Load configuration (`LoadConfig`, `DatasetConfig`) from API
//! - `TimeSeriesStore`, `CsvObservationSource` and `GlacierDataset` from Core

// Re-export everything from SPI
pub use series_spi::*;

// Re-export everything from API
pub use series_api::*;

// Re-export everything from Core
pub use series_core::*;
