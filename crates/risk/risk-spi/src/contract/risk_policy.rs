//! Risk policy trait definition.

use series_spi::Observation;

use crate::error::Result;
use crate::model::RiskAssessment;

/// Classifies an observation against a configured policy.
pub trait RiskPolicy: Send + Sync {
    /// Assess `latest`, using `prior` (if known) for the year-over-year delta.
    fn assess(&self, latest: Observation, prior: Option<Observation>) -> Result<RiskAssessment>;
}
