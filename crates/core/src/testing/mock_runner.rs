//! Mock engine runner for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::engine::{CommandLine, EngineRunner, EnvironmentPolicy, ExecutionResult};

/// A recorded engine invocation for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedRun {
    /// The command that was executed.
    pub command: CommandLine,
    /// The environment policy it ran under.
    pub env: EnvironmentPolicy,
}

/// Mock implementation of the `EngineRunner` trait.
///
/// Provides controllable behavior for testing:
/// - Records every invocation for assertions
/// - Returns scripted results (success with empty output by default)
/// - Simulates spawn failure
/// - Creates declared output files, standing in for the engine's
///   filesystem side effects
#[derive(Debug, Default)]
pub struct MockRunner {
    runs: Arc<RwLock<Vec<RecordedRun>>>,
    results: Arc<RwLock<VecDeque<ExecutionResult>>>,
    spawn_error: Arc<RwLock<Option<std::io::Error>>>,
    outputs: Arc<RwLock<Vec<PathBuf>>>,
}

impl MockRunner {
    /// Create a new mock runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a result for the next run. Unqueued runs succeed with exit 0.
    pub async fn push_result(&self, result: ExecutionResult) {
        self.results.write().await.push_back(result);
    }

    /// Makes the next run fail as if the executable could not be spawned.
    pub async fn set_spawn_error(&self, error: std::io::Error) {
        *self.spawn_error.write().await = Some(error);
    }

    /// Declares files created on every successful run.
    pub async fn set_outputs(&self, outputs: Vec<PathBuf>) {
        *self.outputs.write().await = outputs;
    }

    /// All recorded invocations.
    pub async fn recorded_runs(&self) -> Vec<RecordedRun> {
        self.runs.read().await.clone()
    }

    /// Number of runs performed.
    pub async fn run_count(&self) -> usize {
        self.runs.read().await.len()
    }
}

#[async_trait]
impl EngineRunner for MockRunner {
    async fn run(
        &self,
        command: &CommandLine,
        env: &EnvironmentPolicy,
    ) -> Result<ExecutionResult, std::io::Error> {
        self.runs.write().await.push(RecordedRun {
            command: command.clone(),
            env: env.clone(),
        });

        if let Some(error) = self.spawn_error.write().await.take() {
            return Err(error);
        }

        let result = self
            .results
            .write()
            .await
            .pop_front()
            .unwrap_or(ExecutionResult {
                exit_code: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            });

        if result.success() {
            for path in self.outputs.read().await.iter() {
                if let Some(parent) = path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(path, b"converted").await?;
            }
        }

        Ok(result)
    }
}
