/// Data model for the app dataset.
///
/// Re-exports the record, the immutable dataset container and the
/// display formatting helpers.
pub mod dataset;
pub mod format;
pub mod record;

pub use dataset::Dataset;
pub use record::{AppRecord, AppType, ParseAppTypeError};
