//! One labelled row of a merged report.

use serde::{Deserialize, Serialize};

/// Label of rows taken from the observed series.
pub const OBSERVED_LABEL: &str = "Observed";

const MODEL_LABELS: [&str; 3] = ["Polynomial", "LogLinear", "ARIMA"];

/// Sort rank of a label within one year: observed first, then models in
/// their canonical order, then any other label.
pub fn label_rank(label: &str) -> usize {
    if label == OBSERVED_LABEL {
        return 0;
    }
    MODEL_LABELS
        .iter()
        .position(|l| *l == label)
        .map_or(MODEL_LABELS.len() + 1, |i| i + 1)
}

/// A `(year, value, label)` triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub year: i32,
    pub value: f64,
    pub label: String,
}

impl ReportRow {
    pub fn new(year: i32, value: f64, label: impl Into<String>) -> Self {
        Self {
            year,
            value,
            label: label.into(),
        }
    }

    pub fn observed(year: i32, value: f64) -> Self {
        Self::new(year, value, OBSERVED_LABEL)
    }

    pub fn is_observed(&self) -> bool {
        self.label == OBSERVED_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_rank_order() {
        assert!(label_rank("Observed") < label_rank("Polynomial"));
        assert!(label_rank("Polynomial") < label_rank("LogLinear"));
        assert!(label_rank("LogLinear") < label_rank("ARIMA"));
        assert!(label_rank("ARIMA") < label_rank("Ensemble"));
    }

    #[test]
    fn test_observed_row() {
        let row = ReportRow::observed(2001, 64.2);
        assert!(row.is_observed());
        assert!(!ReportRow::new(2030, 50.0, "ARIMA").is_observed());
    }
}
