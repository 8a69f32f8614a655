//! Error types for report export.

mod report_error;

pub use report_error::{ReportError, Result};
