//! Series error types

use thiserror::Error;

/// Result type alias for series operations
pub type Result<T> = std::result::Result<T, SeriesError>;

/// Reasons a row set is rejected at load time
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two rows share a year and the load policy rejects duplicates
    #[error("duplicate year {year}")]
    DuplicateYear { year: i32 },

    /// A physical quantity that cannot be negative was negative
    #[error("negative value {value} for year {year}")]
    NegativeValue { year: i32, value: f64 },

    /// Nothing survived cleaning
    #[error("no usable rows ({dropped} dropped as incomplete)")]
    NoUsableRows { dropped: usize },
}

/// Errors that can occur while loading or querying a series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// Malformed or insufficient input rows
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// An empty series was queried
    #[error("Series is empty")]
    EmptySeries,

    /// The loader could not produce rows at all
    #[error("Source error: {0}")]
    Source(String),
}

impl SeriesError {
    /// True for load-time validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, SeriesError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_year_display() {
        let error: SeriesError = ValidationError::DuplicateYear { year: 2001 }.into();
        assert_eq!(error.to_string(), "Validation failed: duplicate year 2001");
        assert!(error.is_validation());
    }

    #[test]
    fn test_negative_value_display() {
        let error = SeriesError::Validation(ValidationError::NegativeValue {
            year: 2003,
            value: -1.5,
        });
        assert_eq!(
            error.to_string(),
            "Validation failed: negative value -1.5 for year 2003"
        );
    }

    #[test]
    fn test_no_usable_rows_display() {
        let error = SeriesError::from(ValidationError::NoUsableRows { dropped: 4 });
        assert_eq!(
            error.to_string(),
            "Validation failed: no usable rows (4 dropped as incomplete)"
        );
    }

    #[test]
    fn test_empty_series_display() {
        let error = SeriesError::EmptySeries;
        assert_eq!(error.to_string(), "Series is empty");
        assert!(!error.is_validation());
    }

    #[test]
    fn test_source_display() {
        let error = SeriesError::Source("missing column 'year'".to_string());
        assert_eq!(error.to_string(), "Source error: missing column 'year'");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(SeriesError::EmptySeries);
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeriesError>();
    }
}
