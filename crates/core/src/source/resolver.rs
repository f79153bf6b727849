//! Source classification and validation.

use futures::future::try_join_all;
use reqwest::Url;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use super::error::SourceError;
use super::probe::SourceProbe;
use super::types::SourceRef;

/// Classifies raw source strings as local files or remote URLs and
/// validates them before any engine process is spawned.
pub struct SourceResolver {
    probe: Arc<dyn SourceProbe>,
}

impl SourceResolver {
    /// Creates a resolver using the given reachability probe.
    pub fn new(probe: Arc<dyn SourceProbe>) -> Self {
        Self { probe }
    }

    /// Validates a single source reference.
    ///
    /// Strings with an http(s) scheme are probed over the network; anything
    /// else is treated as a local path that must be an existing, readable
    /// regular file.
    pub async fn resolve(&self, raw: &str) -> Result<SourceRef, SourceError> {
        if let Some(url) = parse_http_url(raw)? {
            self.probe.check(&url).await?;
            debug!(url = %url, "Source resolved as remote");
            return Ok(SourceRef::Remote(url));
        }

        self.resolve_local(Path::new(raw)).await
    }

    /// Validates every source, failing the whole batch on the first problem.
    pub async fn resolve_all(&self, raws: &[String]) -> Result<Vec<SourceRef>, SourceError> {
        if raws.is_empty() {
            return Err(SourceError::NoSources);
        }

        try_join_all(raws.iter().map(|raw| self.resolve(raw))).await
    }

    async fn resolve_local(&self, path: &Path) -> Result<SourceRef, SourceError> {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SourceError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => {
                return Err(SourceError::NotReadable {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        if !metadata.is_file() {
            return Err(SourceError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        tokio::fs::File::open(path)
            .await
            .map_err(|e| SourceError::NotReadable {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!(path = %path.display(), "Source resolved as local file");
        Ok(SourceRef::Local(path.to_path_buf()))
    }
}

/// Parses `raw` as an http(s) URL, `None` when it should be treated as a path.
///
/// Only strings that already start with an http(s) prefix can fail here;
/// other parse failures mean "this is a filesystem path".
fn parse_http_url(raw: &str) -> Result<Option<Url>, SourceError> {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Some(url)),
        Ok(_) => Ok(None),
        Err(e) => {
            let lower = raw.to_ascii_lowercase();
            if lower.starts_with("http://") || lower.starts_with("https://") {
                Err(SourceError::InvalidUrl {
                    url: raw.to_string(),
                    reason: e.to_string(),
                })
            } else {
                Ok(None)
            }
        }
    }
}
