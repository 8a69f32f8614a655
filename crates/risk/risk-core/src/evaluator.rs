//! Threshold risk evaluation.

use risk_api::RiskThresholds;
use risk_spi::{Result, RiskAssessment, RiskError, RiskLevel, RiskPolicy};
use series_spi::Observation;

/// Classify `latest` against `thresholds`.
///
/// The level depends only on `latest.value`, except that a Stable level is
/// raised to Warning when `rapid_loss` is configured and the drop since
/// `prior` exceeds it. A level is never lowered.
pub fn evaluate(
    latest: Observation,
    prior: Option<Observation>,
    thresholds: &RiskThresholds,
) -> Result<RiskAssessment> {
    thresholds.validate()?;
    if !latest.value.is_finite() {
        return Err(RiskError::NonFiniteValue { year: latest.year });
    }

    let mut level = if latest.value < thresholds.critical {
        RiskLevel::Critical
    } else if latest.value <= thresholds.warning_limit() {
        RiskLevel::Warning
    } else {
        RiskLevel::Stable
    };

    let delta = prior
        .map(|p| latest.delta_from(&p))
        .filter(|d| d.is_finite());

    let mut rapid_loss = false;
    if let (Some(limit), Some(d)) = (thresholds.rapid_loss, delta) {
        if d < -limit && level == RiskLevel::Stable {
            level = RiskLevel::Warning;
            rapid_loss = true;
        }
    }

    tracing::debug!(
        year = latest.year,
        value = latest.value,
        level = %level,
        "Evaluated risk"
    );

    Ok(RiskAssessment {
        year: latest.year,
        value: latest.value,
        level,
        threshold: thresholds.critical,
        delta,
        rapid_loss,
    })
}

/// [`RiskPolicy`] backed by fixed thresholds.
#[derive(Debug, Clone, Copy)]
pub struct RiskEvaluator {
    thresholds: RiskThresholds,
}

impl Default for RiskEvaluator {
    fn default() -> Self {
        Self {
            thresholds: RiskThresholds::default(),
        }
    }
}

impl RiskEvaluator {
    /// Create an evaluator, rejecting unusable thresholds up front.
    pub fn new(thresholds: RiskThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Assess the last observation of an ascending series.
    ///
    /// Returns `None` for an empty series.
    pub fn assess_latest(&self, series: &[Observation]) -> Option<Result<RiskAssessment>> {
        let (latest, rest) = series.split_last()?;
        Some(self.assess(*latest, rest.last().copied()))
    }
}

impl RiskPolicy for RiskEvaluator {
    fn assess(&self, latest: Observation, prior: Option<Observation>) -> Result<RiskAssessment> {
        evaluate(latest, prior, &self.thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(year: i32, value: f64) -> Observation {
        Observation::new(year, value)
    }

    #[test]
    fn test_levels_at_boundaries() {
        let t = RiskThresholds::default();
        let level = |v: f64| evaluate(obs(2023, v), None, &t).unwrap().level;

        assert_eq!(level(19.99), RiskLevel::Critical);
        assert_eq!(level(20.0), RiskLevel::Warning);
        assert_eq!(level(24.99), RiskLevel::Warning);
        assert_eq!(level(25.0), RiskLevel::Warning);
        assert_eq!(level(25.01), RiskLevel::Stable);
        assert_eq!(level(0.0), RiskLevel::Critical);
    }

    #[test]
    fn test_threshold_and_delta_reported() {
        let a = evaluate(obs(2020, 25.0), Some(obs(2010, 40.0)), &RiskThresholds::new(30.0, 2.0))
            .unwrap();
        assert_eq!(a.threshold, 30.0);
        assert_eq!(a.delta, Some(-15.0));
        assert_eq!(a.level, RiskLevel::Critical);
        assert!(!a.rapid_loss);
    }

    #[test]
    fn test_rapid_loss_raises_stable_only() {
        let t = RiskThresholds::default().with_rapid_loss(10.0);

        let raised = evaluate(obs(2021, 50.0), Some(obs(2020, 65.0)), &t).unwrap();
        assert_eq!(raised.level, RiskLevel::Warning);
        assert!(raised.rapid_loss);

        let critical = evaluate(obs(2021, 5.0), Some(obs(2020, 30.0)), &t).unwrap();
        assert_eq!(critical.level, RiskLevel::Critical);
        assert!(!critical.rapid_loss);

        let small = evaluate(obs(2021, 50.0), Some(obs(2020, 55.0)), &t).unwrap();
        assert_eq!(small.level, RiskLevel::Stable);
    }

    #[test]
    fn test_rapid_loss_disabled_by_default() {
        let a = evaluate(obs(2021, 50.0), Some(obs(2020, 500.0)), &RiskThresholds::default())
            .unwrap();
        assert_eq!(a.level, RiskLevel::Stable);
    }

    #[test]
    fn test_invalid_inputs() {
        let bad = RiskThresholds::new(20.0, -5.0);
        assert!(matches!(
            evaluate(obs(2020, 30.0), None, &bad),
            Err(RiskError::InvalidThreshold { .. })
        ));
        assert!(RiskEvaluator::new(bad).is_err());

        assert_eq!(
            evaluate(obs(2020, f64::NAN), None, &RiskThresholds::default()),
            Err(RiskError::NonFiniteValue { year: 2020 })
        );
    }

    #[test]
    fn test_assess_latest() {
        let evaluator = RiskEvaluator::default();
        assert!(evaluator.assess_latest(&[]).is_none());

        let series = [obs(2001, 50.0), obs(2010, 40.0), obs(2020, 25.0)];
        let a = evaluator.assess_latest(&series).unwrap().unwrap();
        assert_eq!(a.year, 2020);
        assert_eq!(a.delta, Some(-15.0));

        let single = evaluator.assess_latest(&series[..1]).unwrap().unwrap();
        assert_eq!(single.delta, None);
    }
}
