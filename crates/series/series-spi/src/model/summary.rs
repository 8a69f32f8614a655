//! Descriptive metrics over a loaded series.

use serde::{Deserialize, Serialize};

use super::Observation;

/// Headline metrics shown next to the observed series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub first: Observation,
    pub latest: Observation,
    pub min: f64,
    pub max: f64,
    /// `max - min` across the whole record.
    pub total_loss: f64,
    /// `latest - first`; negative when the glacier shrank.
    pub net_change: f64,
}

impl SeriesSummary {
    /// Builds the summary from observations sorted by year.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_sorted(observations: &[Observation]) -> Option<Self> {
        let first = *observations.first()?;
        let latest = *observations.last()?;

        let min = observations
            .iter()
            .map(|o| o.value)
            .fold(f64::INFINITY, f64::min);
        let max = observations
            .iter()
            .map(|o| o.value)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            first,
            latest,
            min,
            max,
            total_loss: max - min,
            net_change: latest.value - first.value,
        })
    }

    /// Number of years spanned by the record.
    pub fn span_years(&self) -> i32 {
        self.latest.year - self.first.year
    }
}
