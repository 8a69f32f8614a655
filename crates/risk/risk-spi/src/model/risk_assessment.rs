//! Result of classifying one observation.

use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Risk classification of the latest observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub year: i32,
    pub value: f64,
    pub level: RiskLevel,
    /// The critical threshold the value was compared against.
    pub threshold: f64,
    /// `value - prior.value`, when a prior observation was supplied.
    pub delta: Option<f64>,
    /// The level was raised because the delta exceeded the rapid-loss limit.
    #[serde(default)]
    pub rapid_loss: bool,
}

impl RiskAssessment {
    /// Human-readable alert text.
    pub fn message(&self) -> String {
        match self.level {
            RiskLevel::Critical => format!(
                "Critical: Glacier area dangerously low! ({:.2} sq.km)",
                self.value
            ),
            RiskLevel::Warning if self.rapid_loss => format!(
                "Warning: Glacier lost {:.2} sq.km since the previous observation ({:.2} sq.km)",
                -self.delta.unwrap_or_default(),
                self.value
            ),
            RiskLevel::Warning => format!(
                "Warning: Glacier nearing danger level ({:.2} sq.km)",
                self.value
            ),
            RiskLevel::Stable => format!("Glacier stable. Current: {:.2} sq.km", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment(level: RiskLevel, value: f64) -> RiskAssessment {
        RiskAssessment {
            year: 2023,
            value,
            level,
            threshold: 20.0,
            delta: None,
            rapid_loss: false,
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            assessment(RiskLevel::Critical, 18.456).message(),
            "Critical: Glacier area dangerously low! (18.46 sq.km)"
        );
        assert_eq!(
            assessment(RiskLevel::Warning, 24.0).message(),
            "Warning: Glacier nearing danger level (24.00 sq.km)"
        );
        assert_eq!(
            assessment(RiskLevel::Stable, 57.1).message(),
            "Glacier stable. Current: 57.10 sq.km"
        );
    }

    #[test]
    fn test_rapid_loss_message() {
        let mut a = assessment(RiskLevel::Warning, 40.0);
        a.delta = Some(-22.5);
        a.rapid_loss = true;
        assert_eq!(
            a.message(),
            "Warning: Glacier lost 22.50 sq.km since the previous observation (40.00 sq.km)"
        );
    }

    #[test]
    fn test_json_without_rapid_loss_field() {
        let json = r#"{"year":2020,"value":25.0,"level":"Warning","threshold":20.0,"delta":null}"#;
        let a: RiskAssessment = serde_json::from_str(json).unwrap();
        assert_eq!(a.level, RiskLevel::Warning);
        assert!(!a.rapid_loss);
    }
}
