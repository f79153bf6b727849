pub mod config;
pub mod converter;
pub mod engine;
pub mod source;
pub mod testing;

pub use config::{load_config, load_config_from_str, validate_config, ConfigError};
pub use converter::{
    ConversionRequest, ConversionResult, Converter, ConverterConfig, ConverterError,
    SofficeConverter, TargetSpec,
};
pub use engine::{
    CommandLine, EngineError, EngineHandle, EngineLocator, EngineRunner, EnvironmentPolicy,
    ExecutionResult, PipeId, ProcessRunner, ENGINE_BINARY_NAMES,
};
pub use source::{HttpProbe, SourceError, SourceProbe, SourceRef, SourceResolver};

use std::path::Path;

/// Converts a single document into the given target file using defaults.
///
/// The source may be a local path or an http(s) URL; the engine is located
/// on `PATH` and the output format defaults to PDF.
pub async fn convert(
    source: &str,
    target: impl AsRef<Path>,
) -> Result<ConversionResult, ConverterError> {
    SofficeConverter::with_defaults()
        .convert(source, target.as_ref())
        .await
}

/// Converts several documents into a target folder with one engine run.
pub async fn convert_multiple(
    sources: &[String],
    target_folder: impl AsRef<Path>,
) -> Result<ConversionResult, ConverterError> {
    SofficeConverter::with_defaults()
        .convert_multiple(sources, target_folder.as_ref())
        .await
}
