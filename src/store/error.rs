use std::path::PathBuf;

use thiserror::Error;

/// Faults the selection store cannot recover from locally.
///
/// A missing or unreadable snapshot is not an error: it loads as empty.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("malformed snapshot at {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
