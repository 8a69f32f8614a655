//! # report
//!
//! Merged observed/forecast report rows with CSV and JSON export.

pub use report_facade::*;
