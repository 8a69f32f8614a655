//! CSV observation source.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use series_api::DatasetConfig;
use series_spi::{ObservationSource, RawRow, Result, SeriesError, SourceRows};

/// Reads a header-mapped CSV table of yearly rows.
///
/// The year and area columns are mandatory; the elevation column is read
/// only when the header has it. Cells that do not parse become `None` and
/// are dropped by the store.
pub struct CsvObservationSource<R: Read> {
    reader: csv::Reader<R>,
    config: DatasetConfig,
}

impl<R: Read> CsvObservationSource<R> {
    pub fn from_reader(reader: R, config: DatasetConfig) -> Self {
        Self {
            reader: csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .flexible(true)
                .from_reader(reader),
            config,
        }
    }
}

impl CsvObservationSource<File> {
    /// Open a CSV file on disk.
    pub fn from_path(path: impl AsRef<Path>, config: DatasetConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| SeriesError::Source(format!("failed to open {}: {}", path.display(), e)))?;
        Ok(Self::from_reader(file, config))
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

/// Years may be written as floats by upstream tooling ("2001.0").
fn parse_year(cell: &str) -> Option<i32> {
    if let Ok(year) = cell.parse::<i32>() {
        return Some(year);
    }
    let value = cell.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

fn parse_value(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok()
}

impl<R: Read> ObservationSource for CsvObservationSource<R> {
    fn read_rows(&mut self) -> Result<SourceRows> {
        let headers = self
            .reader
            .headers()
            .map_err(|e| SeriesError::Source(format!("failed to read headers: {}", e)))?
            .clone();

        let year_idx = column_index(&headers, &self.config.year_column).ok_or_else(|| {
            SeriesError::Source(format!("column '{}' not found", self.config.year_column))
        })?;
        let area_idx = column_index(&headers, &self.config.area_column).ok_or_else(|| {
            SeriesError::Source(format!("column '{}' not found", self.config.area_column))
        })?;
        let elevation_idx = column_index(&headers, &self.config.elevation_column);

        let mut area = Vec::new();
        let mut elevation = elevation_idx.map(|_| Vec::new());

        for record in self.reader.records() {
            let record =
                record.map_err(|e| SeriesError::Source(format!("failed to read record: {}", e)))?;

            let year = record.get(year_idx).and_then(parse_year);
            area.push(RawRow::new(year, record.get(area_idx).and_then(parse_value)));

            if let (Some(idx), Some(rows)) = (elevation_idx, elevation.as_mut()) {
                rows.push(RawRow::new(year, record.get(idx).and_then(parse_value)));
            }
        }

        Ok(SourceRows { area, elevation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(text: &'static str) -> CsvObservationSource<&'static [u8]> {
        CsvObservationSource::from_reader(text.as_bytes(), DatasetConfig::default())
    }

    #[test]
    fn test_reads_area_only_table() {
        let rows = source("year,area_km2\n2001,50.0\n2002,49.5\n")
            .read_rows()
            .unwrap();

        assert_eq!(rows.area, vec![RawRow::complete(2001, 50.0), RawRow::complete(2002, 49.5)]);
        assert!(rows.elevation.is_none());
    }

    #[test]
    fn test_reads_elevation_when_present() {
        let rows = source("year,area_km2,mean_elevation_m\n2001,50.0,4890.5\n2002,49.5,\n")
            .read_rows()
            .unwrap();

        let elevation = rows.elevation.unwrap();
        assert_eq!(elevation[0], RawRow::complete(2001, 4890.5));
        assert_eq!(elevation[1], RawRow::new(Some(2002), None));
    }

    #[test]
    fn test_unparseable_cells_become_none() {
        let rows = source("year,area_km2\nabc,50.0\n2002,n/a\n2003.0, 48.25 \n")
            .read_rows()
            .unwrap();

        assert_eq!(rows.area[0], RawRow::new(None, Some(50.0)));
        assert_eq!(rows.area[1], RawRow::new(Some(2002), None));
        assert_eq!(rows.area[2], RawRow::complete(2003, 48.25));
    }

    #[test]
    fn test_missing_mandatory_column() {
        let err = source("year,area\n2001,50.0\n").read_rows().unwrap_err();
        assert_eq!(err, SeriesError::Source("column 'area_km2' not found".to_string()));
    }

    #[test]
    fn test_parse_year_rejects_fractional() {
        assert_eq!(parse_year("2001"), Some(2001));
        assert_eq!(parse_year("2001.0"), Some(2001));
        assert_eq!(parse_year("2001.5"), None);
        assert_eq!(parse_year(""), None);
    }
}
