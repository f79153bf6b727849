//! Error types for the converter module.

use thiserror::Error;

use crate::engine::EngineError;
use crate::source::SourceError;

/// Errors that can occur during conversion.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// A source failed validation before the engine was invoked.
    #[error("Invalid source: {0}")]
    InvalidSource(#[from] SourceError),

    /// The conversion engine executable could not be located.
    #[error("{0}")]
    EngineNotFound(#[from] EngineError),

    /// The engine ran but did not produce the requested conversion.
    #[error("Conversion failed! Output: {output:?}, Error: {error:?}")]
    ConversionFailed { output: String, error: String },

    /// I/O error around the conversion itself.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConverterError {
    /// Creates a conversion failure from captured engine output.
    pub fn conversion_failed(output: impl Into<String>, error: impl Into<String>) -> Self {
        let output = output.into();
        let error = error.into();

        Self::ConversionFailed {
            output: output.trim().to_string(),
            error: error.trim().to_string(),
        }
    }

    /// Creates a conversion failure for an engine that could not be spawned.
    ///
    /// An executable that vanishes between location and execution lands
    /// here, not in `EngineNotFound`, which is reserved for location time.
    pub fn spawn_failed(source: std::io::Error) -> Self {
        Self::ConversionFailed {
            output: String::new(),
            error: format!("failed to run conversion engine: {}", source),
        }
    }
}
