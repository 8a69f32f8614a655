//! Model selection and parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Extrapolation model family.
///
/// Ordering is the presentation order used when several models forecast the
/// same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    Polynomial,
    LogLinear,
    #[serde(rename = "ARIMA")]
    Arima,
}

impl ModelKind {
    /// Display name, also used as the report label.
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::Polynomial => "Polynomial",
            ModelKind::LogLinear => "LogLinear",
            ModelKind::Arima => "ARIMA",
        }
    }

    pub fn all() -> [ModelKind; 3] {
        [ModelKind::Polynomial, ModelKind::LogLinear, ModelKind::Arima]
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A model together with its structural parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ModelSpec {
    /// Least-squares polynomial in the year.
    Polynomial { degree: usize },
    /// Linear regression of `ln(max(value, 1))` on the year.
    LogLinear,
    /// ARIMA(p, d, q) over the value sequence.
    Arima { p: usize, d: usize, q: usize },
}

impl ModelSpec {
    pub fn polynomial(degree: usize) -> Self {
        ModelSpec::Polynomial { degree }
    }

    pub fn log_linear() -> Self {
        ModelSpec::LogLinear
    }

    pub fn arima(p: usize, d: usize, q: usize) -> Self {
        ModelSpec::Arima { p, d, q }
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            ModelSpec::Polynomial { .. } => ModelKind::Polynomial,
            ModelSpec::LogLinear => ModelKind::LogLinear,
            ModelSpec::Arima { .. } => ModelKind::Arima,
        }
    }

    /// Smallest series length the model can be fit on.
    pub fn min_observations(&self) -> usize {
        match *self {
            ModelSpec::Polynomial { degree } => (degree + 1).max(2),
            ModelSpec::LogLinear => 2,
            ModelSpec::Arima { p, d, q } => (p + d + q + 1).max(2),
        }
    }

    /// Human-readable description, e.g. `ARIMA(1,1,1)`.
    pub fn describe(&self) -> String {
        match *self {
            ModelSpec::Polynomial { degree } => format!("Polynomial(degree={})", degree),
            ModelSpec::LogLinear => "LogLinear".to_string(),
            ModelSpec::Arima { p, d, q } => format!("ARIMA({},{},{})", p, d, q),
        }
    }
}

impl Default for ModelSpec {
    fn default() -> Self {
        ModelSpec::Polynomial { degree: 2 }
    }
}

impl fmt::Display for ModelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(ModelSpec::polynomial(2).describe(), "Polynomial(degree=2)");
        assert_eq!(ModelSpec::log_linear().describe(), "LogLinear");
        assert_eq!(ModelSpec::arima(1, 1, 1).to_string(), "ARIMA(1,1,1)");
    }

    #[test]
    fn test_min_observations() {
        assert_eq!(ModelSpec::polynomial(2).min_observations(), 3);
        assert_eq!(ModelSpec::polynomial(0).min_observations(), 2);
        assert_eq!(ModelSpec::log_linear().min_observations(), 2);
        assert_eq!(ModelSpec::arima(1, 1, 1).min_observations(), 4);
        assert_eq!(ModelSpec::arima(0, 0, 0).min_observations(), 2);
    }

    #[test]
    fn test_kind_order() {
        assert!(ModelKind::Polynomial < ModelKind::LogLinear);
        assert!(ModelKind::LogLinear < ModelKind::Arima);
        assert_eq!(ModelSpec::arima(2, 1, 0).kind(), ModelKind::Arima);
    }

    #[test]
    fn test_spec_json_shape() {
        let json = serde_json::to_string(&ModelSpec::arima(1, 1, 1)).unwrap();
        assert_eq!(json, r#"{"model":"arima","p":1,"d":1,"q":1}"#);

        let spec: ModelSpec = serde_json::from_str(r#"{"model":"polynomial","degree":3}"#).unwrap();
        assert_eq!(spec, ModelSpec::polynomial(3));

        let spec: ModelSpec = serde_json::from_str(r#"{"model":"log_linear"}"#).unwrap();
        assert_eq!(spec, ModelSpec::LogLinear);
    }

    #[test]
    fn test_kind_json_uses_label() {
        assert_eq!(serde_json::to_string(&ModelKind::Arima).unwrap(), r#""ARIMA""#);
        assert_eq!(serde_json::to_string(&ModelKind::LogLinear).unwrap(), r#""LogLinear""#);
    }
}
