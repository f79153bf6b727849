//! Types for the converter module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::engine::{EngineHandle, PipeId};
use crate::source::SourceRef;

/// Where converted documents should land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    /// Convert a single source into exactly this file.
    File(PathBuf),
    /// Convert one or more sources into this directory.
    Folder(PathBuf),
}

impl TargetSpec {
    /// The directory handed to the engine as `--outdir`.
    pub fn outdir(&self) -> PathBuf {
        match self {
            Self::File(path) => match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
            Self::Folder(path) => path.clone(),
        }
    }
}

/// One fully prepared conversion, ready to become a command line.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Validated sources, never empty.
    pub sources: Vec<SourceRef>,
    pub target: TargetSpec,
    pub engine: EngineHandle,
    /// Format passed to `--convert-to`, optionally carrying an export
    /// filter suffix such as `pdf:writer_pdf_Export`.
    pub convert_to: String,
    pub pipe: PipeId,
}

/// Successful conversion report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Converted files, in source order.
    pub outputs: Vec<PathBuf>,
    /// Engine executable that performed the conversion.
    pub engine: PathBuf,
    /// Wall-clock duration of the whole request.
    pub duration_ms: u64,
}
