//! Report export error types.

use thiserror::Error;

/// Report export errors.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV export failed: {0}")]
    Csv(String),

    #[error("JSON export failed: {0}")]
    Json(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
