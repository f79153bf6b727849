//! Configuration for the converter module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::engine::EnvironmentPolicy;

/// Configuration for the LibreOffice-based converter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Explicit path to the engine binary. Auto-located on the search
    /// path when unset.
    #[serde(default)]
    pub engine_path: Option<PathBuf>,

    /// Format passed to `--convert-to`, optionally with an export filter
    /// (e.g. "pdf:writer_pdf_Export").
    #[serde(default = "default_convert_to")]
    pub convert_to: String,

    /// Directory holding per-invocation engine profiles.
    #[serde(default = "default_temp_dir")]
    pub temp_dir: PathBuf,

    /// Timeout for the URL reachability probe in seconds.
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,

    /// Environment handed to the engine subprocess.
    #[serde(default)]
    pub env_policy: EnvironmentPolicy,

    /// Additional engine arguments inserted before the sources.
    #[serde(default)]
    pub extra_engine_args: Vec<String>,
}

fn default_convert_to() -> String {
    "pdf".to_string()
}

fn default_temp_dir() -> PathBuf {
    std::env::temp_dir()
}

fn default_probe_timeout() -> u64 {
    30
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            engine_path: None,
            convert_to: default_convert_to(),
            temp_dir: default_temp_dir(),
            probe_timeout_secs: default_probe_timeout(),
            env_policy: EnvironmentPolicy::default(),
            extra_engine_args: Vec::new(),
        }
    }
}

impl ConverterConfig {
    /// Sets an explicit engine binary path.
    pub fn with_engine_path(mut self, engine_path: PathBuf) -> Self {
        self.engine_path = Some(engine_path);
        self
    }

    /// Sets the target format.
    pub fn with_convert_to(mut self, convert_to: impl Into<String>) -> Self {
        self.convert_to = convert_to.into();
        self
    }

    /// Sets the directory for per-invocation engine profiles.
    pub fn with_temp_dir(mut self, temp_dir: PathBuf) -> Self {
        self.temp_dir = temp_dir;
        self
    }

    /// Sets the probe timeout in seconds.
    pub fn with_probe_timeout(mut self, probe_timeout_secs: u64) -> Self {
        self.probe_timeout_secs = probe_timeout_secs;
        self
    }

    /// Sets the subprocess environment policy.
    pub fn with_env_policy(mut self, env_policy: EnvironmentPolicy) -> Self {
        self.env_policy = env_policy;
        self
    }
}
