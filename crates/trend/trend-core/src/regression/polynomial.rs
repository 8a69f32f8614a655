//! Polynomial regression on the year
//!
//! Fits `value ≈ Σ cᵢ · yearⁱ` by ordinary least squares over the whole
//! series, with no regularization.
//!
//! ## Underdetermined fits
//!
//! A series with `len <= degree` cannot pin down `degree + 1` coefficients.
//! The fit fails with [`TsError::InsufficientData`] instead of reducing the
//! degree, so the caller decides whether a lower degree is acceptable.
//!
//! ## Conditioning
//!
//! Years are centred on their mean and divided by their largest deviation
//! before the normal equations are formed. Raw calendar years (≈2000) raised
//! to the second power and beyond would otherwise swamp the intercept column.

use serde::{Deserialize, Serialize};
use trend_spi::{ModelKind, TrendModel, TsError, TsResult};

use crate::linalg;
use crate::validation::check_series;

/// Highest supported polynomial degree.
pub const MAX_DEGREE: usize = 10;

/// Least-squares polynomial trend.
///
/// # Example
///
/// ```rust
/// use trend_core::regression::PolynomialRegression;
/// use trend_core::TrendModel;
///
/// let mut model = PolynomialRegression::new(2).unwrap();
/// model.fit(&[2001, 2010, 2020], &[50.0, 40.0, 25.0]).unwrap();
///
/// let at_2020 = model.predict_at(2020).unwrap();
/// assert!((at_2020 - 25.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolynomialRegression {
    /// Polynomial degree
    degree: usize,
    /// Coefficients in the centred, scaled year basis, constant term first
    coefficients: Vec<f64>,
    /// Mean of the fitted years
    center: f64,
    /// Largest absolute deviation of a fitted year from `center`
    scale: f64,
    /// R-squared value
    r_squared: f64,
    /// Whether model has been fitted
    fitted: bool,
}

impl PolynomialRegression {
    /// Create an unfitted model of the given degree.
    pub fn new(degree: usize) -> TsResult<Self> {
        if degree > MAX_DEGREE {
            return Err(TsError::invalid_parameter(
                "degree",
                format!("polynomial degree must be <= {}", MAX_DEGREE),
            ));
        }

        Ok(Self {
            degree,
            coefficients: vec![0.0; degree + 1],
            center: 0.0,
            scale: 1.0,
            r_squared: 0.0,
            fitted: false,
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Get R-squared (coefficient of determination)
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    fn to_basis(&self, year: i32) -> f64 {
        (year as f64 - self.center) / self.scale
    }

    fn evaluate(&self, x: f64) -> f64 {
        // Horner's scheme, highest power first
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// Predict the value at a single year
    pub fn predict_at(&self, year: i32) -> TsResult<f64> {
        if !self.fitted {
            return Err(TsError::NotFitted);
        }
        Ok(self.evaluate(self.to_basis(year)))
    }
}

impl TrendModel for PolynomialRegression {
    fn fit(&mut self, years: &[i32], values: &[f64]) -> TsResult<()> {
        self.fitted = false;
        check_series(years, values, (self.degree + 1).max(2))?;

        let n = years.len() as f64;
        self.center = years.iter().map(|&y| y as f64).sum::<f64>() / n;
        self.scale = years
            .iter()
            .map(|&y| (y as f64 - self.center).abs())
            .fold(0.0, f64::max);
        if self.scale <= 0.0 {
            return Err(TsError::NumericalError(
                "all observations share one year".to_string(),
            ));
        }

        let terms = self.degree + 1;
        let mut gram = vec![0.0; terms * terms];
        let mut rhs = vec![0.0; terms];

        for (&year, &value) in years.iter().zip(values) {
            let x = self.to_basis(year);
            let powers: Vec<f64> = (0..terms).map(|j| x.powi(j as i32)).collect();
            for j in 0..terms {
                rhs[j] += powers[j] * value;
                for k in 0..terms {
                    gram[j * terms + k] += powers[j] * powers[k];
                }
            }
        }

        self.coefficients = linalg::solve(&gram, &rhs, terms)?;

        // Calculate R-squared
        let mean_y = values.iter().sum::<f64>() / n;
        let ss_tot: f64 = values.iter().map(|&v| (v - mean_y).powi(2)).sum();
        let ss_res: f64 = years
            .iter()
            .zip(values)
            .map(|(&year, &v)| (v - self.evaluate(self.to_basis(year))).powi(2))
            .sum();

        self.r_squared = if ss_tot > 1e-10 {
            1.0 - ss_res / ss_tot
        } else {
            1.0
        };

        self.fitted = true;
        Ok(())
    }

    fn predict_years(&self, years: &[i32]) -> TsResult<Vec<f64>> {
        years.iter().map(|&year| self.predict_at(year)).collect()
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }

    fn kind(&self) -> ModelKind {
        ModelKind::Polynomial
    }
}
