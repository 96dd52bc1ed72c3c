use std::path::PathBuf;

use thiserror::Error;

/// Failures of a listing run. None of them are retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not determine the user profile directory")]
    PathResolution,

    #[error("failed to open pgAdmin database at {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to read saved servers")]
    Query(#[source] rusqlite::Error),

    #[error("failed to close pgAdmin database")]
    Close(#[source] rusqlite::Error),

    #[error("failed to write report")]
    Output(#[from] std::io::Error),

    #[error("failed to encode report as JSON")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
