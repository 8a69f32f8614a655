//! Trend model trait
//!
//! Defines the fit/predict interface shared by every extrapolation model.

use crate::error::TsResult;
use crate::model::ModelKind;

/// Common trait for all yearly trend models
///
/// Models are fit on parallel `years`/`values` slices (years strictly
/// increasing) and evaluated at arbitrary years. Regression models evaluate
/// their fitted curve; sequential models such as ARIMA only accept years
/// after the last observed one.
///
/// # Example
///
/// ```rust,ignore
/// use trend_spi::TrendModel;
///
/// fn extrapolate<M: TrendModel>(model: &mut M, years: &[i32], values: &[f64]) -> trend_spi::TsResult<Vec<f64>> {
///     model.fit(years, values)?;
///     model.predict_years(&[2030, 2040, 2050])
/// }
/// ```
pub trait TrendModel: Send + Sync {
    /// Fit the model to the observed series
    ///
    /// # Arguments
    ///
    /// * `years` - Observation years, strictly increasing
    /// * `values` - Observed values, same length as `years`
    fn fit(&mut self, years: &[i32], values: &[f64]) -> TsResult<()>;

    /// Predict values at the given years
    fn predict_years(&self, years: &[i32]) -> TsResult<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;

    /// The model family
    fn kind(&self) -> ModelKind;
}
