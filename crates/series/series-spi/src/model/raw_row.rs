//! Uncleaned rows as produced by a loader.

use serde::{Deserialize, Serialize};

/// A row before cleaning. Missing cells are `None` and are dropped at load time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRow {
    pub year: Option<i32>,
    pub value: Option<f64>,
}

impl RawRow {
    pub fn new(year: Option<i32>, value: Option<f64>) -> Self {
        Self { year, value }
    }

    /// A fully populated row.
    pub fn complete(year: i32, value: f64) -> Self {
        Self {
            year: Some(year),
            value: Some(value),
        }
    }

    /// Returns the row as a `(year, value)` pair when both cells are present
    /// and the value is finite.
    pub fn usable(&self) -> Option<(i32, f64)> {
        match (self.year, self.value) {
            (Some(year), Some(value)) if value.is_finite() => Some((year, value)),
            _ => None,
        }
    }
}

impl From<(i32, f64)> for RawRow {
    fn from((year, value): (i32, f64)) -> Self {
        Self::complete(year, value)
    }
}

/// Rows read from one source table.
///
/// `elevation` is `Some` only when the source carries an elevation column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRows {
    pub area: Vec<RawRow>,
    pub elevation: Option<Vec<RawRow>>,
}
