//! Contracts for report output.

mod report_sink;

pub use report_sink::ReportSink;
