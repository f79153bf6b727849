//! Engine command-line assembly.

use crate::engine::CommandLine;
use crate::source::SourceRef;

use super::types::ConversionRequest;

/// File extension produced for a given `--convert-to` value.
///
/// The engine derives output extensions from the format token alone,
/// ignoring any `:filter` suffix.
pub fn format_extension(convert_to: &str) -> &str {
    convert_to.split(':').next().unwrap_or(convert_to)
}

/// Output filename the engine chooses for `source`.
pub fn default_output_name(source: &SourceRef, convert_to: &str) -> String {
    format!("{}.{}", source.output_stem(), format_extension(convert_to))
}

/// Builds the headless engine invocation for a prepared request.
///
/// Sources are appended as discrete arguments, so shell metacharacters in
/// paths or URL query strings need no quoting.
pub fn build(request: &ConversionRequest, extra_args: &[String]) -> CommandLine {
    let mut args = vec![
        "--headless".to_string(),
        "--convert-to".to_string(),
        request.convert_to.clone(),
        "--outdir".to_string(),
        request.target.outdir().to_string_lossy().to_string(),
        format!(
            "-env:UserInstallation=file://{}",
            request.pipe.profile_dir().display()
        ),
    ];

    args.extend(extra_args.iter().cloned());
    args.extend(request.sources.iter().map(|source| source.as_command_arg()));

    CommandLine {
        program: request.engine.path.clone(),
        args,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::TargetSpec;
    use crate::engine::{EngineHandle, PipeId};
    use reqwest::Url;
    use std::path::{Path, PathBuf};

    fn request(sources: Vec<SourceRef>, target: TargetSpec, convert_to: &str) -> ConversionRequest {
        ConversionRequest {
            sources,
            target,
            engine: EngineHandle::new(PathBuf::from("/usr/bin/soffice")),
            convert_to: convert_to.to_string(),
            pipe: PipeId::fresh(Path::new("/tmp")),
        }
    }

    #[test]
    fn test_build_single_local_source() {
        let request = request(
            vec![SourceRef::Local(PathBuf::from("/docs/report.docx"))],
            TargetSpec::File(PathBuf::from("/out/report.pdf")),
            "pdf",
        );

        let command = build(&request, &[]);

        assert_eq!(command.program, PathBuf::from("/usr/bin/soffice"));
        assert!(command.args.contains(&"--headless".to_string()));
        assert!(command.args.contains(&"--convert-to".to_string()));
        assert!(command.args.contains(&"pdf".to_string()));
        assert!(command.args.contains(&"--outdir".to_string()));
        assert!(command.args.contains(&"/out".to_string()));
        assert_eq!(command.args.last(), Some(&"/docs/report.docx".to_string()));
    }

    #[test]
    fn test_build_includes_profile_isolation() {
        let request = request(
            vec![SourceRef::Local(PathBuf::from("/docs/report.docx"))],
            TargetSpec::File(PathBuf::from("/out/report.pdf")),
            "pdf",
        );

        let command = build(&request, &[]);
        let env_arg = command
            .args
            .iter()
            .find(|a| a.starts_with("-env:UserInstallation="))
            .unwrap();

        assert!(env_arg.starts_with("-env:UserInstallation=file:///tmp/soffice-pipe-"));
    }

    #[test]
    fn test_build_different_pipes_never_collide() {
        let make = || {
            request(
                vec![SourceRef::Local(PathBuf::from("/docs/report.docx"))],
                TargetSpec::File(PathBuf::from("/out/report.pdf")),
                "pdf",
            )
        };
        let env_arg = |command: &CommandLine| {
            command
                .args
                .iter()
                .find(|a| a.starts_with("-env:UserInstallation="))
                .unwrap()
                .clone()
        };

        let first = build(&make(), &[]);
        let second = build(&make(), &[]);

        assert_ne!(env_arg(&first), env_arg(&second));
    }

    #[test]
    fn test_build_passes_filter_suffix_verbatim() {
        let request = request(
            vec![SourceRef::Local(PathBuf::from("/docs/report.docx"))],
            TargetSpec::File(PathBuf::from("/out/report.pdf")),
            "pdf:writer_pdf_Export",
        );

        let command = build(&request, &[]);

        assert!(command.args.contains(&"pdf:writer_pdf_Export".to_string()));
    }

    #[test]
    fn test_build_url_source_is_a_single_argument() {
        let url = Url::parse("https://example.com/files/report.docx?version=2&draft=true").unwrap();
        let request = request(
            vec![SourceRef::Remote(url)],
            TargetSpec::Folder(PathBuf::from("/out")),
            "pdf",
        );

        let command = build(&request, &[]);

        assert_eq!(
            command.args.last(),
            Some(&"https://example.com/files/report.docx?version=2&draft=true".to_string())
        );
    }

    #[test]
    fn test_build_extra_args_come_before_sources() {
        let request = request(
            vec![SourceRef::Local(PathBuf::from("/docs/a.docx"))],
            TargetSpec::Folder(PathBuf::from("/out")),
            "pdf",
        );

        let command = build(&request, &["--norestore".to_string()]);
        let extra_pos = command
            .args
            .iter()
            .position(|a| a == "--norestore")
            .unwrap();
        let source_pos = command
            .args
            .iter()
            .position(|a| a == "/docs/a.docx")
            .unwrap();

        assert!(extra_pos < source_pos);
    }

    #[test]
    fn test_build_batch_keeps_source_order() {
        let request = request(
            vec![
                SourceRef::Local(PathBuf::from("/docs/a.docx")),
                SourceRef::Local(PathBuf::from("/docs/b.odt")),
            ],
            TargetSpec::Folder(PathBuf::from("/out/batch")),
            "pdf",
        );

        let command = build(&request, &[]);
        let len = command.args.len();

        assert!(command.args.contains(&"/out/batch".to_string()));
        assert_eq!(command.args[len - 2], "/docs/a.docx");
        assert_eq!(command.args[len - 1], "/docs/b.odt");
    }

    #[test]
    fn test_format_extension_strips_filter() {
        assert_eq!(format_extension("pdf"), "pdf");
        assert_eq!(format_extension("pdf:writer_pdf_Export"), "pdf");
        assert_eq!(format_extension("txt:Text (encoded):UTF8"), "txt");
    }

    #[test]
    fn test_default_output_name() {
        let local = SourceRef::Local(PathBuf::from("/docs/report.docx"));
        assert_eq!(default_output_name(&local, "pdf"), "report.pdf");

        let url = Url::parse("https://example.com/minutes.docx?v=2").unwrap();
        let remote = SourceRef::Remote(url);
        assert_eq!(
            default_output_name(&remote, "pdf:writer_pdf_Export"),
            "minutes.pdf"
        );
    }
}
