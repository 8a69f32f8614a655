//! Report Core
//!
//! Merging observed and forecast series into one labelled sequence, and
//! exporting it as CSV or JSON.

mod assembler;
mod export;

pub use assembler::*;
pub use export::*;

// Re-export from SPI
pub use report_spi::{label_rank, ReportError, ReportRow, ReportSink, Result, OBSERVED_LABEL};
