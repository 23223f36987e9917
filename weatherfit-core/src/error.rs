use std::path::PathBuf;

use thiserror::Error;

/// Decoding failures for values found in the shared store. `read_snapshot`
/// logs these and degrades instead of returning them.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed forecast document: {0}")]
    MalformedForecast(#[source] serde_json::Error),
    #[error("malformed legacy weatherData blob: {0}")]
    MalformedLegacyBlob(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse store file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("store file {path} must contain a JSON object of key/value pairs")]
    NotAnObject { path: PathBuf },
}
