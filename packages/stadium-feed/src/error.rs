//! Typed errors for the fetch and publish boundaries.
//!
//! The pipeline itself never fails: malformed input degrades to dropped
//! records or unconfirmed entries. Only the I/O edges return errors, and
//! those are fatal to the invoking binary.

use std::path::PathBuf;

use thiserror::Error;

/// Errors fetching the events page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Errors writing the produced document.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
