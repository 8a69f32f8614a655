//! Loader contract.

use crate::error::Result;
use crate::model::SourceRows;

/// Anything that can hand over a table of uncleaned yearly rows.
///
/// Implementations own I/O and transport concerns (files, HTTP). Cleaning,
/// deduplication and ordering belong to the store, so implementations should
/// pass unparseable cells through as `None` rather than failing.
///
/// # Example
///
/// ```rust,ignore
/// use series_spi::{ObservationSource, RawRow, SourceRows};
///
/// struct Fixed(Vec<RawRow>);
///
/// impl ObservationSource for Fixed {
///     fn read_rows(&mut self) -> series_spi::Result<SourceRows> {
///         Ok(SourceRows { area: self.0.clone(), elevation: None })
///     }
/// }
/// ```
pub trait ObservationSource {
    /// Read every row the source holds.
    fn read_rows(&mut self) -> Result<SourceRows>;
}
