//! A single yearly measurement.

use serde::{Deserialize, Serialize};

/// One ground-truth measurement: glacier area in km² or mean elevation in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    pub value: f64,
}

impl Observation {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }

    /// Difference `self.value - earlier.value`.
    pub fn delta_from(&self, earlier: &Observation) -> f64 {
        self.value - earlier.value
    }
}

impl From<(i32, f64)> for Observation {
    fn from((year, value): (i32, f64)) -> Self {
        Self { year, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuple() {
        let obs: Observation = (2001, 50.0).into();
        assert_eq!(obs.year, 2001);
        assert_eq!(obs.value, 50.0);
    }

    #[test]
    fn test_delta_from() {
        let earlier = Observation::new(2019, 30.0);
        let latest = Observation::new(2020, 25.5);
        assert!((latest.delta_from(&earlier) + 4.5).abs() < 1e-12);
    }
}
