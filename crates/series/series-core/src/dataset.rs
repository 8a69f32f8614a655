//! Area series plus the optional elevation series.

use std::path::Path;

use series_api::DatasetConfig;
use series_spi::{ObservationSource, Result, SeriesError, ValidationError};

use crate::csv_source::CsvObservationSource;
use crate::store::TimeSeriesStore;

/// Everything loaded from one source table.
///
/// `elevation` is decided once at load time from the source's columns.
#[derive(Debug, Clone, PartialEq)]
pub struct GlacierDataset {
    pub area: TimeSeriesStore,
    pub elevation: Option<TimeSeriesStore>,
}

impl GlacierDataset {
    pub fn new(area: TimeSeriesStore, elevation: Option<TimeSeriesStore>) -> Self {
        Self { area, elevation }
    }

    /// Read and validate both series from a source.
    ///
    /// An unusable area column fails the load. An elevation column with no
    /// complete row is treated as absent; other elevation errors (duplicate
    /// years, sign violations) still fail the load.
    pub fn load<S: ObservationSource + ?Sized>(source: &mut S, config: &DatasetConfig) -> Result<Self> {
        let rows = source.read_rows()?;

        let area = TimeSeriesStore::load(rows.area, &config.area_load())?;
        let elevation = match rows.elevation {
            None => None,
            Some(rows) => match TimeSeriesStore::load(rows, &config.elevation_load()) {
                Ok(store) => Some(store),
                Err(SeriesError::Validation(ValidationError::NoUsableRows { dropped })) => {
                    tracing::warn!(dropped, "elevation column has no usable rows, ignoring it");
                    None
                }
                Err(e) => return Err(e),
            },
        };

        tracing::info!(
            area_points = area.len(),
            elevation_points = elevation.as_ref().map(TimeSeriesStore::len).unwrap_or(0),
            "loaded glacier dataset"
        );

        Ok(Self { area, elevation })
    }

    /// Read and validate a CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>, config: &DatasetConfig) -> Result<Self> {
        let mut source = CsvObservationSource::from_path(path, config.clone())?;
        Self::load(&mut source, config)
    }

    pub fn has_elevation(&self) -> bool {
        self.elevation.is_some()
    }
}
