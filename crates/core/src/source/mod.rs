//! Source classification and validation.
//!
//! Conversion sources arrive as raw strings that are either local paths or
//! http(s) URLs. This module classifies them, checks local files exist and
//! are readable, and probes remote URLs with a HEAD request so invalid
//! sources fail before any engine process is spawned.

mod error;
mod probe;
mod resolver;
mod types;

pub use error::SourceError;
pub use probe::{HttpProbe, SourceProbe};
pub use resolver::SourceResolver;
pub use types::SourceRef;
