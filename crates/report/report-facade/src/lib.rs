//! Report Facade
//!
//! Unified re-exports for the report module:
//! - `ReportRow`, `ReportSink` and `ReportError` from SPI
//! - `merge`, `write_csv`, `to_json` and `CsvReportSink` from Core

// Re-export everything from SPI
pub use report_spi::*;

// Re-export everything from Core
pub use report_core::*;
