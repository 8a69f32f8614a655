//! Error types for trend models
//!
//! [`TsError`] is what a model reports; [`FitError`] is what the forecaster
//! hands back to callers, tagged with the model that was attempted.

mod fit_error;
mod ts_error;

pub use fit_error::{FitError, Result};
pub use ts_error::{TsError, TsResult};
