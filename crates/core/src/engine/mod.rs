//! Conversion engine discovery and process execution.
//!
//! Locates the `soffice` executable on the host, models fully built
//! invocations, and runs them as child processes with a controlled
//! environment.

mod error;
mod locator;
mod runner;
mod types;

pub use error::EngineError;
pub use locator::{EngineLocator, ENGINE_BINARY_NAMES};
pub use runner::{EngineRunner, ProcessRunner};
pub use types::{CommandLine, EngineHandle, EnvironmentPolicy, ExecutionResult, PipeId};
