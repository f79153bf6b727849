//! Error types for source resolution.

use reqwest::Url;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating conversion sources.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No source documents were provided.
    #[error("No source documents provided")]
    NoSources,

    /// Local source path does not exist.
    #[error("Source file not found: {path}")]
    NotFound { path: PathBuf },

    /// Local source path exists but is not a regular file.
    #[error("Source is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Local source file could not be opened for reading.
    #[error("Source file not readable: {path}")]
    NotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source looked like a URL but could not be parsed as one.
    #[error("Invalid source URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Remote source answered the reachability probe with a failure status.
    #[error("Source URL {url} is unreachable (HTTP {status})")]
    Unreachable { url: String, status: u16 },

    /// Reachability probe could not complete.
    #[error("Failed to check source URL {url}: {reason}")]
    ProbeFailed { url: String, reason: String },
}

impl SourceError {
    /// Creates a probe failure for the given URL.
    pub fn probe_failed(url: &Url, reason: impl Into<String>) -> Self {
        Self::ProbeFailed {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}
