//! Report sink trait definition.

use crate::error::Result;
use crate::model::ReportRow;

/// Destination for an assembled report.
pub trait ReportSink {
    /// Write every row, in order.
    fn write_rows(&mut self, rows: &[ReportRow]) -> Result<()>;
}
