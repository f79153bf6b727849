//! Types shared by engine location and execution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Resolved path to the conversion engine executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineHandle {
    pub path: PathBuf,
}

impl EngineHandle {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

/// Per-request token isolating one engine instance's user profile.
///
/// Concurrent engine processes sharing a profile directory corrupt each
/// other's state, so every request gets a fresh token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeId {
    token: String,
    profile_dir: PathBuf,
}

impl PipeId {
    /// Generates a fresh token with a profile path under `temp_dir`.
    pub fn fresh(temp_dir: &Path) -> Self {
        let token = Uuid::new_v4().to_string();
        let profile_dir = temp_dir.join(format!("soffice-pipe-{}", token));

        Self { token, profile_dir }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Directory handed to the engine as its private profile location.
    pub fn profile_dir(&self) -> &Path {
        &self.profile_dir
    }
}

/// A fully built engine invocation.
///
/// Arguments are discrete vector elements handed to the OS directly; no
/// shell ever parses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// Captured outcome of one engine process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code, `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Environment handed to the engine subprocess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EnvironmentPolicy {
    /// Spawn with a cleared environment containing only `vars`.
    Isolated { vars: HashMap<String, String> },
    /// Spawn with the parent environment unchanged.
    Inherit,
}

impl Default for EnvironmentPolicy {
    /// Isolated environment passing through `HOME` alone, which the engine
    /// needs to place its profile machinery.
    fn default() -> Self {
        let mut vars = HashMap::new();
        if let Ok(home) = std::env::var("HOME") {
            vars.insert("HOME".to_string(), home);
        }

        Self::Isolated { vars }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_ids_are_unique() {
        let temp = std::env::temp_dir();
        let a = PipeId::fresh(&temp);
        let b = PipeId::fresh(&temp);

        assert_ne!(a.token(), b.token());
        assert_ne!(a.profile_dir(), b.profile_dir());
    }

    #[test]
    fn test_pipe_profile_dir_layout() {
        let pipe = PipeId::fresh(Path::new("/tmp"));
        let dir = pipe.profile_dir().to_string_lossy().to_string();

        assert!(dir.starts_with("/tmp/soffice-pipe-"));
        assert!(dir.ends_with(pipe.token()));
    }

    #[test]
    fn test_execution_result_success() {
        let ok = ExecutionResult {
            exit_code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        };
        let failed = ExecutionResult {
            exit_code: Some(1),
            ..ok.clone()
        };
        let killed = ExecutionResult {
            exit_code: None,
            ..ok.clone()
        };

        assert!(ok.success());
        assert!(!failed.success());
        assert!(!killed.success());
    }

    #[test]
    fn test_default_environment_is_isolated() {
        match EnvironmentPolicy::default() {
            EnvironmentPolicy::Isolated { vars } => {
                assert!(vars.keys().all(|k| k == "HOME"));
            }
            EnvironmentPolicy::Inherit => panic!("default policy must isolate"),
        }
    }

    #[test]
    fn test_environment_policy_serialization() {
        let policy = EnvironmentPolicy::Inherit;
        let json = serde_json::to_string(&policy).unwrap();
        let parsed: EnvironmentPolicy = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, policy);
    }
}
