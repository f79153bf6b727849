//! Engine executable discovery.

use std::ffi::OsString;
use std::path::Path;
use tracing::debug;

use super::error::EngineError;
use super::types::EngineHandle;

/// Binary names probed on the search path, in order. `soffice.bin` is the
/// fallback name some distributions install instead of the wrapper.
pub const ENGINE_BINARY_NAMES: &[&str] = &["soffice", "soffice.bin"];

/// Finds the conversion engine executable on the host.
///
/// No result is cached: each call walks the search path again, so an engine
/// reinstalled mid-process is picked up by the next request.
pub struct EngineLocator {
    search_path: Option<OsString>,
}

impl EngineLocator {
    /// Locator searching the process `PATH`.
    pub fn new() -> Self {
        Self { search_path: None }
    }

    /// Locator searching a fixed path string instead of `PATH`.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    /// Resolves the engine executable, honoring an explicit override.
    ///
    /// An override only has to exist as a file; auto-discovery walks the
    /// search path once per known binary name and takes the first match
    /// with the execute bit set.
    pub fn locate(&self, override_path: Option<&Path>) -> Result<EngineHandle, EngineError> {
        if let Some(path) = override_path {
            let exists = std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
            if !exists {
                return Err(EngineError::OverrideNotFound {
                    path: path.to_path_buf(),
                });
            }

            debug!(engine = %path.display(), "Using configured engine path");
            return Ok(EngineHandle::new(path.to_path_buf()));
        }

        let search_path = self
            .search_path
            .clone()
            .or_else(|| std::env::var_os("PATH"));

        if let Some(search_path) = search_path {
            for name in ENGINE_BINARY_NAMES {
                for dir in std::env::split_paths(&search_path) {
                    let candidate = dir.join(name);
                    if is_executable_file(&candidate) {
                        debug!(engine = %candidate.display(), "Located conversion engine");
                        return Ok(EngineHandle::new(candidate));
                    }
                }
            }
        }

        Err(EngineError::NotFound {
            names: ENGINE_BINARY_NAMES.join(", "),
        })
    }
}

impl Default for EngineLocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `path` is an existing file the current user could execute.
fn is_executable_file(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    true
}
