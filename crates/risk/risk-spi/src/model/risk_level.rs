//! Ordered risk levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk level, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Stable,
    Warning,
    Critical,
}

impl RiskLevel {
    /// Whether the level should be surfaced as an alert.
    pub fn is_alert(&self) -> bool {
        *self > RiskLevel::Stable
    }

    pub fn name(&self) -> &'static str {
        match self {
            RiskLevel::Stable => "Stable",
            RiskLevel::Warning => "Warning",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
