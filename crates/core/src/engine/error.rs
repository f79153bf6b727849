//! Error types for engine location.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating the conversion engine executable.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No known engine binary was found on the search path.
    #[error("Conversion engine not found, searched names: {names}")]
    NotFound { names: String },

    /// The explicitly configured engine path does not exist.
    #[error("Conversion engine not found at path: {path}")]
    OverrideNotFound { path: PathBuf },
}
