//! CSV and JSON export of report rows.

use std::io::Write;

use report_spi::{ReportError, ReportRow, ReportSink, Result};

/// Write rows as CSV with a `year,value,label` header.
pub fn write_csv<W: Write>(rows: &[ReportRow], writer: W) -> Result<()> {
    let mut sink = CsvReportSink::new(writer);
    sink.write_rows(rows)?;
    sink.flush()
}

/// Serialize rows as a pretty-printed JSON array.
pub fn to_json(rows: &[ReportRow]) -> Result<String> {
    serde_json::to_string_pretty(rows).map_err(|e| ReportError::Json(e.to_string()))
}

/// [`ReportSink`] writing CSV records.
pub struct CsvReportSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvReportSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| ReportError::Csv(e.error().to_string()))
    }
}

impl<W: Write> ReportSink for CsvReportSink<W> {
    fn write_rows(&mut self, rows: &[ReportRow]) -> Result<()> {
        for row in rows {
            self.writer
                .serialize(row)
                .map_err(|e| ReportError::Csv(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ReportRow> {
        vec![
            ReportRow::observed(2020, 25.0),
            ReportRow::new(2030, 17.5, "Polynomial"),
        ]
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        write_csv(&rows(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "year,value,label\n2020,25.0,Observed\n2030,17.5,Polynomial\n");
    }

    #[test]
    fn test_write_csv_empty_has_no_header() {
        let mut buf = Vec::new();
        write_csv(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_sink_into_inner() {
        let mut sink = CsvReportSink::new(Vec::new());
        sink.write_rows(&rows()[..1]).unwrap();
        let buf = sink.into_inner().unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with("year,value,label\n"));
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&rows()).unwrap();
        let back: Vec<ReportRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rows());
        assert!(json.contains("\"label\": \"Observed\""));
    }
}
