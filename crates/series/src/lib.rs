//! # series
//!
//! Yearly area and elevation series: CSV loading, cleaning and validation.

pub use series_facade::*;
