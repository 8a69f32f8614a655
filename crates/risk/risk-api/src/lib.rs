//! Risk API
//!
//! Threshold configuration for classifying glacier area.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use risk_spi::{Result, RiskAssessment, RiskError, RiskLevel, RiskPolicy};

/// Area (km²) below which the glacier is critical.
pub const DEFAULT_CRITICAL: f64 = 20.0;
/// Band above the critical threshold that still raises a warning.
pub const DEFAULT_WARNING_MARGIN: f64 = 5.0;

/// Threshold policy for risk classification.
///
/// `value < critical` is Critical, `value <= critical + warning_margin` is
/// Warning, anything else is Stable. When `rapid_loss` is set, a Stable
/// observation that dropped by more than that amount since the prior one is
/// raised to Warning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    #[serde(default = "default_critical")]
    pub critical: f64,
    #[serde(default = "default_warning_margin")]
    pub warning_margin: f64,
    #[serde(default)]
    pub rapid_loss: Option<f64>,
}

fn default_critical() -> f64 {
    DEFAULT_CRITICAL
}

fn default_warning_margin() -> f64 {
    DEFAULT_WARNING_MARGIN
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            critical: DEFAULT_CRITICAL,
            warning_margin: DEFAULT_WARNING_MARGIN,
            rapid_loss: None,
        }
    }
}

impl RiskThresholds {
    pub fn new(critical: f64, warning_margin: f64) -> Self {
        Self {
            critical,
            warning_margin,
            rapid_loss: None,
        }
    }

    pub fn with_rapid_loss(mut self, rapid_loss: f64) -> Self {
        self.rapid_loss = Some(rapid_loss);
        self
    }

    /// Upper (inclusive) bound of the warning band.
    pub fn warning_limit(&self) -> f64 {
        self.critical + self.warning_margin
    }

    /// Check that every threshold is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.critical.is_finite() {
            return Err(RiskError::invalid_threshold("critical", "must be finite"));
        }
        if !self.warning_margin.is_finite() || self.warning_margin < 0.0 {
            return Err(RiskError::invalid_threshold(
                "warning_margin",
                "must be finite and non-negative",
            ));
        }
        if let Some(limit) = self.rapid_loss {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(RiskError::invalid_threshold(
                    "rapid_loss",
                    "must be finite and positive",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = RiskThresholds::default();
        assert_eq!(t.critical, 20.0);
        assert_eq!(t.warning_margin, 5.0);
        assert_eq!(t.rapid_loss, None);
        assert_eq!(t.warning_limit(), 25.0);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(RiskThresholds::new(f64::NAN, 5.0).validate().is_err());
        assert!(RiskThresholds::new(20.0, -1.0).validate().is_err());
        assert!(RiskThresholds::new(20.0, f64::INFINITY).validate().is_err());
        assert!(RiskThresholds::default().with_rapid_loss(0.0).validate().is_err());
        assert!(RiskThresholds::default().with_rapid_loss(-3.0).validate().is_err());
    }

    #[test]
    fn test_zero_margin_is_valid() {
        assert!(RiskThresholds::new(20.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let t: RiskThresholds = serde_json::from_str(r#"{"rapid_loss": 10.0}"#).unwrap();
        assert_eq!(t.critical, DEFAULT_CRITICAL);
        assert_eq!(t.warning_margin, DEFAULT_WARNING_MARGIN);
        assert_eq!(t.rapid_loss, Some(10.0));
    }
}
