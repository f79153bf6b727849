//! LibreOffice-based converter implementation.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::engine::{EngineLocator, EngineRunner, ExecutionResult, PipeId, ProcessRunner};
use crate::source::{HttpProbe, SourceError, SourceProbe, SourceResolver};

use super::command;
use super::config::ConverterConfig;
use super::error::ConverterError;
use super::traits::Converter;
use super::types::{ConversionRequest, ConversionResult, TargetSpec};

/// Converter driving a headless LibreOffice process.
pub struct SofficeConverter {
    config: ConverterConfig,
    locator: EngineLocator,
    probe: Arc<dyn SourceProbe>,
    runner: Arc<dyn EngineRunner>,
}

impl SofficeConverter {
    /// Creates a converter with the given configuration.
    pub fn new(config: ConverterConfig) -> Self {
        let probe = Arc::new(HttpProbe::new(Duration::from_secs(config.probe_timeout_secs)));

        Self {
            locator: EngineLocator::new(),
            probe,
            runner: Arc::new(ProcessRunner::new()),
            config,
        }
    }

    /// Creates a converter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ConverterConfig::default())
    }

    /// Creates a converter with injected capabilities.
    pub fn with_parts(
        config: ConverterConfig,
        locator: EngineLocator,
        probe: Arc<dyn SourceProbe>,
        runner: Arc<dyn EngineRunner>,
    ) -> Self {
        Self {
            config,
            locator,
            probe,
            runner,
        }
    }

    /// Prepares a request. The engine is located before sources are probed,
    /// so a missing engine never triggers network traffic.
    async fn prepare(
        &self,
        raw_sources: &[String],
        target: TargetSpec,
    ) -> Result<ConversionRequest, ConverterError> {
        if raw_sources.is_empty() {
            return Err(SourceError::NoSources.into());
        }

        let engine = self.locator.locate(self.config.engine_path.as_deref())?;
        debug!(engine = %engine.path.display(), "Conversion engine located");

        let resolver = SourceResolver::new(Arc::clone(&self.probe));
        let sources = resolver.resolve_all(raw_sources).await?;

        Ok(ConversionRequest {
            sources,
            target,
            engine,
            convert_to: self.config.convert_to.clone(),
            pipe: PipeId::fresh(&self.config.temp_dir),
        })
    }

    /// Runs the engine once for the prepared request.
    async fn execute(
        &self,
        request: &ConversionRequest,
    ) -> Result<ExecutionResult, ConverterError> {
        let outdir = request.target.outdir();
        tokio::fs::create_dir_all(&outdir).await?;

        let command = command::build(request, &self.config.extra_engine_args);
        debug!(
            program = %command.program.display(),
            args = ?command.args,
            "Running conversion engine"
        );

        let result = self
            .runner
            .run(&command, &self.config.env_policy)
            .await
            .map_err(ConverterError::spawn_failed)?;

        if !result.success() {
            return Err(ConverterError::conversion_failed(
                result.stdout,
                result.stderr,
            ));
        }

        Ok(result)
    }

    /// Moves the engine-named output onto the requested target path.
    async fn finalize_single(
        &self,
        result: &ExecutionResult,
        produced: &Path,
        target: &Path,
    ) -> Result<(), ConverterError> {
        let outcome = if produced == target {
            tokio::fs::metadata(target).await.map(|_| ())
        } else {
            tokio::fs::rename(produced, target).await
        };

        match outcome {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ConverterError::conversion_failed(
                    result.stdout.clone(),
                    format!("engine produced no output at {}", produced.display()),
                ))
            }
            Err(e) => Err(ConverterError::Io(e)),
        }
    }
}

#[async_trait]
impl Converter for SofficeConverter {
    fn name(&self) -> &str {
        "soffice"
    }

    async fn convert(
        &self,
        source: &str,
        target: &Path,
    ) -> Result<ConversionResult, ConverterError> {
        let start = Instant::now();

        let raw = [source.to_string()];
        let request = self
            .prepare(&raw, TargetSpec::File(target.to_path_buf()))
            .await?;
        let result = self.execute(&request).await?;

        let produced = request.target.outdir().join(command::default_output_name(
            &request.sources[0],
            &request.convert_to,
        ));
        self.finalize_single(&result, &produced, target).await?;

        info!(
            source = source,
            target = %target.display(),
            "Conversion complete"
        );

        Ok(ConversionResult {
            outputs: vec![target.to_path_buf()],
            engine: request.engine.path,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    async fn convert_multiple(
        &self,
        sources: &[String],
        target_folder: &Path,
    ) -> Result<ConversionResult, ConverterError> {
        let start = Instant::now();

        let request = self
            .prepare(sources, TargetSpec::Folder(target_folder.to_path_buf()))
            .await?;
        self.execute(&request).await?;

        let outputs: Vec<PathBuf> = request
            .sources
            .iter()
            .map(|source| target_folder.join(command::default_output_name(source, &request.convert_to)))
            .collect();

        info!(
            count = outputs.len(),
            folder = %target_folder.display(),
            "Batch conversion complete"
        );

        Ok(ConversionResult {
            outputs,
            engine: request.engine.path,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    async fn validate(&self) -> Result<(), ConverterError> {
        let engine = self.locator.locate(self.config.engine_path.as_deref())?;
        debug!(engine = %engine.path.display(), "Conversion engine available");

        // Profile directories are created under here by the engine itself.
        tokio::fs::create_dir_all(&self.config.temp_dir).await?;

        Ok(())
    }
}
