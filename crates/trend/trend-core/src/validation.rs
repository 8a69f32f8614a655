//! Input checks shared by every model.

use trend_spi::{TsError, TsResult};

/// Check that `years`/`values` form a usable series of at least `required` points.
pub fn check_series(years: &[i32], values: &[f64], required: usize) -> TsResult<()> {
    if years.len() != values.len() {
        return Err(TsError::InvalidData(format!(
            "{} years but {} values",
            years.len(),
            values.len()
        )));
    }

    if values.len() < required {
        return Err(TsError::InsufficientData {
            required,
            actual: values.len(),
        });
    }

    if values.iter().any(|v| !v.is_finite()) {
        return Err(TsError::InvalidData(
            "Data contains NaN or infinite values".to_string(),
        ));
    }

    if years.windows(2).any(|w| w[0] >= w[1]) {
        return Err(TsError::InvalidData(
            "years must be strictly increasing".to_string(),
        ));
    }

    Ok(())
}

/// Check that every prediction is a finite number.
pub fn check_finite(predictions: &[f64]) -> TsResult<()> {
    if predictions.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(TsError::NumericalError(
            "prediction is not a finite number".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_series() {
        assert!(check_series(&[2001, 2002], &[1.0, 2.0], 2).is_ok());
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            check_series(&[2001], &[1.0], 2),
            Err(TsError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            check_series(&[2001, 2002], &[1.0], 1),
            Err(TsError::InvalidData(_))
        ));
    }

    #[test]
    fn test_unsorted_or_duplicate_years() {
        assert!(check_series(&[2002, 2001], &[1.0, 2.0], 2).is_err());
        assert!(check_series(&[2001, 2001], &[1.0, 2.0], 2).is_err());
    }

    #[test]
    fn test_non_finite_values() {
        assert!(check_series(&[2001, 2002], &[1.0, f64::NAN], 2).is_err());
    }

    #[test]
    fn test_check_finite() {
        assert!(check_finite(&[1.0, -2.0]).is_ok());
        assert!(check_finite(&[f64::INFINITY]).is_err());
    }
}
