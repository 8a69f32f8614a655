//! Merging of observed and forecast series.

use report_spi::{label_rank, ReportRow};
use series_spi::Observation;
use trend_spi::ForecastPoint;

/// Merge observations and forecasts into one sequence ordered by year.
///
/// Within a year rows are ordered by label rank, so an observed row precedes
/// a forecast for the same year. The sort is stable: rows with equal year
/// and label keep their input order.
pub fn merge(observed: &[Observation], forecasts: &[ForecastPoint]) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = observed
        .iter()
        .map(|o| ReportRow::observed(o.year, o.value))
        .chain(
            forecasts
                .iter()
                .map(|p| ReportRow::new(p.year, p.predicted_value, p.model.name())),
        )
        .collect();

    rows.sort_by_key(|r| (r.year, label_rank(&r.label)));
    rows
}
