//! Validated in-memory store for one yearly series.

use std::collections::btree_map::{BTreeMap, Entry};

use series_api::{DuplicateYearPolicy, LoadConfig};
use series_spi::{Observation, RawRow, Result, SeriesError, SeriesSummary, ValidationError};

/// Counts of rows discarded while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Rows with a missing year, missing value or non-finite value.
    pub dropped: usize,
    /// Rows discarded under [`DuplicateYearPolicy::KeepFirst`].
    pub duplicates: usize,
}

/// Holds one cleaned series, immutable after load.
///
/// Years are unique and strictly increasing. The store never mutates its
/// observations, so a shared reference can be read from several threads.
///
/// # Example
///
/// ```rust
/// use series_api::LoadConfig;
/// use series_core::TimeSeriesStore;
///
/// let store = TimeSeriesStore::load(
///     vec![(2010, 40.0), (2001, 50.0), (2020, 25.0)],
///     &LoadConfig::area(),
/// ).unwrap();
///
/// assert_eq!(store.years(), vec![2001, 2010, 2020]);
/// assert_eq!(store.latest().unwrap().value, 25.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesStore {
    observations: Vec<Observation>,
    report: LoadReport,
}

impl TimeSeriesStore {
    /// Clean, validate and sort a row set.
    ///
    /// Incomplete rows are dropped. A negative value under
    /// `ValueDomain::NonNegative`, a duplicate year under
    /// `DuplicateYearPolicy::Reject`, or an empty result fails the load.
    pub fn load<I>(rows: I, config: &LoadConfig) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<RawRow>,
    {
        let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
        let mut report = LoadReport::default();

        for row in rows {
            let row: RawRow = row.into();
            let Some((year, value)) = row.usable() else {
                report.dropped += 1;
                continue;
            };

            if !config.value_domain.admits(value) {
                return Err(ValidationError::NegativeValue { year, value }.into());
            }

            match by_year.entry(year) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(_) => match config.duplicate_policy {
                    DuplicateYearPolicy::Reject => {
                        return Err(ValidationError::DuplicateYear { year }.into());
                    }
                    DuplicateYearPolicy::KeepFirst => report.duplicates += 1,
                },
            }
        }

        if by_year.is_empty() {
            return Err(ValidationError::NoUsableRows {
                dropped: report.dropped,
            }
            .into());
        }

        if report.dropped > 0 || report.duplicates > 0 {
            tracing::debug!(
                dropped = report.dropped,
                duplicates = report.duplicates,
                kept = by_year.len(),
                "discarded rows while loading series"
            );
        }

        let observations = by_year.into_iter().map(Observation::from).collect();
        Ok(Self {
            observations,
            report,
        })
    }

    /// Observations in ascending year order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn years(&self) -> Vec<i32> {
        self.observations.iter().map(|o| o.year).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The most recent observation.
    pub fn latest(&self) -> Result<Observation> {
        self.observations
            .last()
            .copied()
            .ok_or(SeriesError::EmptySeries)
    }

    /// The observation before the latest one, if any.
    pub fn previous(&self) -> Option<Observation> {
        let n = self.observations.len();
        if n < 2 {
            return None;
        }
        Some(self.observations[n - 2])
    }

    /// Headline metrics over the whole record.
    pub fn summary(&self) -> Result<SeriesSummary> {
        SeriesSummary::from_sorted(&self.observations).ok_or(SeriesError::EmptySeries)
    }

    /// What was discarded during load.
    pub fn load_report(&self) -> LoadReport {
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use series_api::ValueDomain;

    #[test]
    fn test_load_sorts_by_year() {
        let store =
            TimeSeriesStore::load(vec![(2020, 25.0), (2001, 50.0), (2010, 40.0)], &LoadConfig::area())
                .unwrap();

        assert_eq!(store.years(), vec![2001, 2010, 2020]);
        assert_eq!(store.values(), vec![50.0, 40.0, 25.0]);
    }

    #[test]
    fn test_incomplete_rows_are_dropped() {
        let rows = vec![
            RawRow::complete(2001, 50.0),
            RawRow::new(None, Some(49.0)),
            RawRow::new(Some(2003), None),
            RawRow::complete(2004, f64::NAN),
            RawRow::complete(2005, 45.0),
        ];
        let store = TimeSeriesStore::load(rows, &LoadConfig::area()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.load_report().dropped, 3);
    }

    #[test]
    fn test_duplicate_year_rejected_by_default() {
        let err = TimeSeriesStore::load(
            vec![(2001, 50.0), (2001, 48.0), (2005, 45.0)],
            &LoadConfig::area(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            SeriesError::Validation(ValidationError::DuplicateYear { year: 2001 })
        );
    }

    #[test]
    fn test_duplicate_year_keep_first() {
        let config = LoadConfig::area().with_duplicate_policy(DuplicateYearPolicy::KeepFirst);
        let store =
            TimeSeriesStore::load(vec![(2001, 50.0), (2001, 48.0), (2005, 45.0)], &config).unwrap();

        let count_2001 = store.observations().iter().filter(|o| o.year == 2001).count();
        assert_eq!(count_2001, 1);
        assert_eq!(store.observations()[0].value, 50.0);
        assert_eq!(store.load_report().duplicates, 1);
    }

    #[test]
    fn test_negative_area_rejected() {
        let err = TimeSeriesStore::load(vec![(2001, 5.0), (2002, -1.0)], &LoadConfig::area())
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_negative_elevation_accepted() {
        let config = LoadConfig::new(DuplicateYearPolicy::Reject, ValueDomain::Unconstrained);
        let store = TimeSeriesStore::load(vec![(2001, -3.0), (2002, -4.0)], &config).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_all_rows_unusable() {
        let err = TimeSeriesStore::load(vec![RawRow::default(), RawRow::default()], &LoadConfig::area())
            .unwrap_err();
        assert_eq!(
            err,
            SeriesError::Validation(ValidationError::NoUsableRows { dropped: 2 })
        );
    }

    #[test]
    fn test_latest_and_previous() {
        let store =
            TimeSeriesStore::load(vec![(2001, 50.0), (2010, 40.0), (2020, 25.0)], &LoadConfig::area())
                .unwrap();

        assert_eq!(store.latest().unwrap(), Observation::new(2020, 25.0));
        assert_eq!(store.previous(), Some(Observation::new(2010, 40.0)));
    }

    #[test]
    fn test_single_point_has_no_previous() {
        let store = TimeSeriesStore::load(vec![(2001, 50.0)], &LoadConfig::area()).unwrap();
        assert!(store.previous().is_none());
    }

    #[test]
    fn test_empty_store_queries() {
        let store = TimeSeriesStore::default();
        assert!(store.is_empty());
        assert_eq!(store.latest(), Err(SeriesError::EmptySeries));
        assert_eq!(store.summary(), Err(SeriesError::EmptySeries));
    }
}
