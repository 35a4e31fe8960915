use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a usable dataset. Nothing downstream runs when the load
/// ends in one of these.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not read dataset at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not fetch dataset from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("dataset is not a valid JSON array of sales records: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("record #{index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },
}
