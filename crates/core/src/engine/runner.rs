//! Engine process execution.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use super::types::{CommandLine, EnvironmentPolicy, ExecutionResult};

/// Executes a built engine invocation.
#[async_trait]
pub trait EngineRunner: Send + Sync {
    /// Runs the command to completion, capturing its output.
    ///
    /// Spawn failures surface as the `io::Error`; a non-zero exit is not an
    /// error at this layer. The call waits for the child to exit, so callers
    /// wanting a deadline wrap the future externally.
    async fn run(
        &self,
        command: &CommandLine,
        env: &EnvironmentPolicy,
    ) -> Result<ExecutionResult, std::io::Error>;
}

/// Runner spawning a real child process.
#[derive(Debug, Default, Clone)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EngineRunner for ProcessRunner {
    async fn run(
        &self,
        command: &CommandLine,
        env: &EnvironmentPolicy,
    ) -> Result<ExecutionResult, std::io::Error> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args).stdin(Stdio::null());

        match env {
            EnvironmentPolicy::Isolated { vars } => {
                cmd.env_clear().envs(vars);
            }
            EnvironmentPolicy::Inherit => {}
        }

        debug!(program = %command.program.display(), "Spawning conversion engine");
        let output = cmd.output().await?;

        Ok(ExecutionResult {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
