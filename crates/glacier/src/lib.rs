//! # glacier
//!
//! One analysis session over a glacier dataset: every configured model is
//! fitted independently, risk is assessed on the latest area observation,
//! and observed and forecast values are merged into one labelled report.
//!
//! ```rust
//! use glacier::{AnalysisConfig, GlacierAnalysis};
//! use glacier::series::{GlacierDataset, LoadConfig, TimeSeriesStore};
//!
//! let rows = vec![(2001, 50.0), (2010, 40.0), (2020, 25.0)];
//! let area = TimeSeriesStore::load(rows, &LoadConfig::area()).unwrap();
//!
//! let report = GlacierAnalysis::new(GlacierDataset::new(area, None))
//!     .run(&AnalysisConfig::default())
//!     .unwrap();
//!
//! // ARIMA(1,1,1) needs four points; the regressions still succeed.
//! assert_eq!(report.successful().count(), 2);
//! ```

mod analysis;
mod config;
mod error;
mod outcome;

pub use analysis::*;
pub use config::*;
pub use error::*;
pub use outcome::*;

pub use report_facade as report;
pub use risk_facade as risk;
pub use series_facade as series;
pub use trend_facade as trend;
