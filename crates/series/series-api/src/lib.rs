//! Series API
//!
//! Configuration types and builders for loading yearly series.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use series_spi::{Observation, RawRow, Result, SeriesError, SeriesSummary, ValidationError};

/// Default name of the year column.
pub const DEFAULT_YEAR_COLUMN: &str = "year";
/// Default name of the glacier area column.
pub const DEFAULT_AREA_COLUMN: &str = "area_km2";
/// Default name of the optional mean elevation column.
pub const DEFAULT_ELEVATION_COLUMN: &str = "mean_elevation_m";

// ============================================================================
// Load policy
// ============================================================================

/// What to do when two usable rows share a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateYearPolicy {
    /// Fail the load with a validation error naming the year.
    #[default]
    Reject,
    /// Keep the first row for the year in input order and drop the rest.
    KeepFirst,
}

/// Sign constraint on series values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueDomain {
    /// Areas: a negative value is malformed data.
    #[default]
    NonNegative,
    /// Elevations: any finite value.
    Unconstrained,
}

impl ValueDomain {
    pub fn admits(&self, value: f64) -> bool {
        match self {
            ValueDomain::NonNegative => value >= 0.0,
            ValueDomain::Unconstrained => true,
        }
    }
}

/// Configuration for turning raw rows into a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadConfig {
    #[serde(default)]
    pub duplicate_policy: DuplicateYearPolicy,
    #[serde(default)]
    pub value_domain: ValueDomain,
}

impl LoadConfig {
    pub fn new(duplicate_policy: DuplicateYearPolicy, value_domain: ValueDomain) -> Self {
        Self {
            duplicate_policy,
            value_domain,
        }
    }

    /// Area series: non-negative values, duplicates rejected.
    pub fn area() -> Self {
        Self::default()
    }

    /// Elevation series: any finite value, duplicates rejected.
    pub fn elevation() -> Self {
        Self::new(DuplicateYearPolicy::Reject, ValueDomain::Unconstrained)
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicateYearPolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

// ============================================================================
// Dataset configuration
// ============================================================================

/// Column mapping and policy for a source table holding area and,
/// optionally, elevation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_year_column")]
    pub year_column: String,
    #[serde(default = "default_area_column")]
    pub area_column: String,
    #[serde(default = "default_elevation_column")]
    pub elevation_column: String,
    #[serde(default)]
    pub duplicate_policy: DuplicateYearPolicy,
}

fn default_year_column() -> String {
    DEFAULT_YEAR_COLUMN.to_string()
}

fn default_area_column() -> String {
    DEFAULT_AREA_COLUMN.to_string()
}

fn default_elevation_column() -> String {
    DEFAULT_ELEVATION_COLUMN.to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            year_column: default_year_column(),
            area_column: default_area_column(),
            elevation_column: default_elevation_column(),
            duplicate_policy: DuplicateYearPolicy::default(),
        }
    }
}

impl DatasetConfig {
    /// Policy for the area series.
    pub fn area_load(&self) -> LoadConfig {
        LoadConfig::area().with_duplicate_policy(self.duplicate_policy)
    }

    /// Policy for the elevation series.
    pub fn elevation_load(&self) -> LoadConfig {
        LoadConfig::elevation().with_duplicate_policy(self.duplicate_policy)
    }
}

/// Builder for DatasetConfig.
#[derive(Debug, Default)]
pub struct DatasetConfigBuilder {
    year_column: Option<String>,
    area_column: Option<String>,
    elevation_column: Option<String>,
    duplicate_policy: Option<DuplicateYearPolicy>,
}

impl DatasetConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year_column(mut self, name: &str) -> Self {
        self.year_column = Some(name.to_string());
        self
    }

    pub fn area_column(mut self, name: &str) -> Self {
        self.area_column = Some(name.to_string());
        self
    }

    pub fn elevation_column(mut self, name: &str) -> Self {
        self.elevation_column = Some(name.to_string());
        self
    }

    pub fn duplicate_policy(mut self, policy: DuplicateYearPolicy) -> Self {
        self.duplicate_policy = Some(policy);
        self
    }

    /// Build the configuration, filling unset fields with defaults.
    pub fn build(self) -> DatasetConfig {
        let defaults = DatasetConfig::default();
        DatasetConfig {
            year_column: self.year_column.unwrap_or(defaults.year_column),
            area_column: self.area_column.unwrap_or(defaults.area_column),
            elevation_column: self.elevation_column.unwrap_or(defaults.elevation_column),
            duplicate_policy: self.duplicate_policy.unwrap_or(defaults.duplicate_policy),
        }
    }
}
