//! Types for source classification.

use reqwest::Url;
use std::path::{Path, PathBuf};

/// A validated conversion source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    /// An existing regular file on the local filesystem.
    Local(PathBuf),
    /// A remote document reachable over HTTP(S).
    Remote(Url),
}

impl SourceRef {
    /// Renders the form handed to the conversion engine as one argument.
    pub fn as_command_arg(&self) -> String {
        match self {
            Self::Local(path) => path.to_string_lossy().to_string(),
            Self::Remote(url) => url.to_string(),
        }
    }

    /// The name stem the engine derives its output filename from.
    ///
    /// For remote sources this is the stem of the last URL path segment;
    /// query strings never contribute.
    pub fn output_stem(&self) -> String {
        let stem = match self {
            Self::Local(path) => path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default(),
            Self::Remote(url) => {
                let segment = url
                    .path_segments()
                    .and_then(|mut segments| segments.next_back())
                    .unwrap_or_default();
                Path::new(segment)
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_default()
            }
        };

        if stem.is_empty() {
            "document".to_string()
        } else {
            stem
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_arg_local() {
        let source = SourceRef::Local(PathBuf::from("/docs/report.docx"));
        assert_eq!(source.as_command_arg(), "/docs/report.docx");
    }

    #[test]
    fn test_command_arg_remote_keeps_query() {
        let url = Url::parse("https://example.com/files/report.docx?version=2&draft=true").unwrap();
        let source = SourceRef::Remote(url);
        assert_eq!(
            source.as_command_arg(),
            "https://example.com/files/report.docx?version=2&draft=true"
        );
    }

    #[test]
    fn test_output_stem_local() {
        let source = SourceRef::Local(PathBuf::from("/docs/quarterly report.docx"));
        assert_eq!(source.output_stem(), "quarterly report");
    }

    #[test]
    fn test_output_stem_remote_ignores_query() {
        let url = Url::parse("https://example.com/a/b/minutes.odt?rev=7").unwrap();
        let source = SourceRef::Remote(url);
        assert_eq!(source.output_stem(), "minutes");
    }

    #[test]
    fn test_output_stem_remote_without_path_falls_back() {
        let url = Url::parse("https://example.com").unwrap();
        let source = SourceRef::Remote(url);
        assert_eq!(source.output_stem(), "document");
    }
}
