//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the capability traits,
//! allowing the full conversion flow to run in tests without network
//! access or an installed office suite.
//!
//! # Example
//!
//! ```rust,ignore
//! use officina_core::testing::{MockProbe, MockRunner};
//!
//! let probe = Arc::new(MockProbe::new());
//! let runner = Arc::new(MockRunner::new());
//!
//! // Configure mock responses
//! probe.set_status("https://example.com/missing.docx", 404).await;
//! runner.set_outputs(vec![out_dir.join("report.pdf")]).await;
//!
//! // Use with SofficeConverter::with_parts...
//! ```

mod mock_probe;
mod mock_runner;

pub use mock_probe::MockProbe;
pub use mock_runner::{MockRunner, RecordedRun};

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Write a small document file for conversion tests.
    pub fn sample_document(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"sample document body").expect("failed to write sample document");
        path
    }

    /// Create a fake engine binary with the execute bit set.
    pub fn fake_engine(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").expect("failed to write fake engine");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("failed to mark fake engine executable");
        }

        path
    }
}
