//! Contracts implemented by observation loaders.

mod observation_source;

pub use observation_source::ObservationSource;
