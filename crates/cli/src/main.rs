use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use officina_core::{load_config, validate_config, Converter, ConverterConfig, SofficeConverter};

#[derive(Parser, Debug)]
#[command(
    name = "officina",
    version,
    about = "Convert documents with a headless LibreOffice",
    arg_required_else_help = true
)]
struct Cli {
    /// Source documents: local paths or http(s) URLs.
    #[arg(required = true)]
    sources: Vec<String>,

    /// Target file (single source) or target folder (batch).
    #[arg(short, long)]
    output: PathBuf,

    /// Output format, optionally with an export filter
    /// (e.g. "pdf:writer_pdf_Export").
    #[arg(long)]
    to: Option<String>,

    /// Path to the soffice binary, overriding search-path discovery.
    #[arg(long)]
    engine: Option<PathBuf>,

    /// Configuration file (TOML). OFFICINA_* environment variables
    /// override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the conversion result as JSON.
    #[arg(long)]
    json: bool,

    /// Only check that the engine is available, converting nothing.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,officina=info,officina_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => ConverterConfig::default(),
    };
    if let Some(engine) = cli.engine.clone() {
        config = config.with_engine_path(engine);
    }
    if let Some(format) = cli.to.clone() {
        config = config.with_convert_to(format);
    }
    validate_config(&config).context("Configuration validation failed")?;

    let converter = SofficeConverter::new(config);

    if cli.check {
        converter.validate().await?;
        info!("Conversion engine available");
        return Ok(());
    }

    let result = if batch_mode(&cli.sources, &cli.output) {
        converter.convert_multiple(&cli.sources, &cli.output).await?
    } else {
        converter.convert(&cli.sources[0], &cli.output).await?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for output in &result.outputs {
            println!("{}", output.display());
        }
    }

    Ok(())
}

/// Whether the invocation converts into a folder rather than a single file.
///
/// One source with a non-directory output means "convert to exactly this
/// file"; anything else treats the output as a folder.
fn batch_mode(sources: &[String], output: &Path) -> bool {
    sources.len() > 1 || output.is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sources(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("doc-{}.docx", i)).collect()
    }

    #[test]
    fn test_single_source_with_file_target_is_not_batch() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("report.pdf");

        assert!(!batch_mode(&sources(1), &target));
    }

    #[test]
    fn test_single_source_with_existing_directory_is_batch() {
        let dir = tempdir().unwrap();

        assert!(batch_mode(&sources(1), dir.path()));
    }

    #[test]
    fn test_multiple_sources_are_always_batch() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("report.pdf");

        assert!(batch_mode(&sources(2), &target));
    }

    #[test]
    fn test_cli_parses_minimal_invocation() {
        let cli = Cli::try_parse_from(["officina", "report.docx", "--output", "report.pdf"])
            .unwrap();

        assert_eq!(cli.sources, vec!["report.docx".to_string()]);
        assert_eq!(cli.output, PathBuf::from("report.pdf"));
        assert!(!cli.json);
        assert!(!cli.check);
    }

    #[test]
    fn test_cli_parses_batch_with_options() {
        let cli = Cli::try_parse_from([
            "officina",
            "a.docx",
            "b.odt",
            "--output",
            "out",
            "--to",
            "pdf:writer_pdf_Export",
            "--engine",
            "/opt/libreoffice/program/soffice",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.sources.len(), 2);
        assert_eq!(cli.to.as_deref(), Some("pdf:writer_pdf_Export"));
        assert_eq!(
            cli.engine,
            Some(PathBuf::from("/opt/libreoffice/program/soffice"))
        );
        assert!(cli.json);
    }

    #[test]
    fn test_cli_requires_sources() {
        assert!(Cli::try_parse_from(["officina", "--output", "report.pdf"]).is_err());
    }
}
