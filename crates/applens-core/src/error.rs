/// Errors raised while loading the dataset.
///
/// Every variant is fatal at startup: a dashboard must never be served
/// from an unreadable or mis-shaped dataset. Filtering and aggregation
/// have no error conditions and never return these.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column {0:?} is missing from the dataset header")]
    MissingColumn(&'static str),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
