//! Trait definitions for the converter module.

use async_trait::async_trait;
use std::path::Path;

use super::error::ConverterError;
use super::types::ConversionResult;

/// A converter that can transform documents via an external engine.
#[async_trait]
pub trait Converter: Send + Sync {
    /// Returns the name of this converter implementation.
    fn name(&self) -> &str;

    /// Converts a single source into the given target file.
    ///
    /// The source may be a local path or an http(s) URL.
    async fn convert(
        &self,
        source: &str,
        target: &Path,
    ) -> Result<ConversionResult, ConverterError>;

    /// Converts several sources into a target folder with one engine run.
    ///
    /// Outputs keep the engine's default names. The batch either fully
    /// succeeds or fails as a whole.
    async fn convert_multiple(
        &self,
        sources: &[String],
        target_folder: &Path,
    ) -> Result<ConversionResult, ConverterError>;

    /// Validates that the converter is properly configured and ready.
    async fn validate(&self) -> Result<(), ConverterError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct StubConverter;

    #[async_trait]
    impl Converter for StubConverter {
        fn name(&self) -> &str {
            "stub"
        }

        async fn convert(
            &self,
            _source: &str,
            target: &Path,
        ) -> Result<ConversionResult, ConverterError> {
            Ok(ConversionResult {
                outputs: vec![target.to_path_buf()],
                engine: PathBuf::from("/usr/bin/soffice"),
                duration_ms: 10,
            })
        }

        async fn convert_multiple(
            &self,
            sources: &[String],
            target_folder: &Path,
        ) -> Result<ConversionResult, ConverterError> {
            Ok(ConversionResult {
                outputs: sources
                    .iter()
                    .map(|s| target_folder.join(format!("{}.pdf", s)))
                    .collect(),
                engine: PathBuf::from("/usr/bin/soffice"),
                duration_ms: 10,
            })
        }

        async fn validate(&self) -> Result<(), ConverterError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_stub_converter_convert() {
        let converter = StubConverter;
        let result = converter
            .convert("report.docx", Path::new("/out/report.pdf"))
            .await
            .unwrap();

        assert_eq!(result.outputs, vec![PathBuf::from("/out/report.pdf")]);
    }

    #[tokio::test]
    async fn test_stub_converter_convert_multiple() {
        let converter = StubConverter;
        let sources = vec!["a".to_string(), "b".to_string()];
        let result = converter
            .convert_multiple(&sources, Path::new("/out"))
            .await
            .unwrap();

        assert_eq!(result.outputs.len(), 2);
        assert_eq!(converter.name(), "stub");
    }
}
