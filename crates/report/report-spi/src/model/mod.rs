//! Data models for reports.

mod report_row;

pub use report_row::{label_rank, ReportRow, OBSERVED_LABEL};
