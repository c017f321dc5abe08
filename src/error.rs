//! Error types shared by the library core.
//!
//! Command handlers wrap these in `anyhow` for user-facing context; the
//! core modules stay on the typed enum.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the fetch/build/write/pack core.
#[derive(Debug, Error)]
pub enum EfhError {
    /// Transport-level failure talking to the wiki API. Fatal for the run.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// A JSON body (API response or config file) did not decode as expected.
    #[error("json decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A path the operation requires does not exist.
    #[error("missing expected path: {0}")]
    MissingPath(PathBuf),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EfhError>;
