//! Mock source probe for testing.

use async_trait::async_trait;
use reqwest::Url;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::source::{SourceError, SourceProbe};

/// Mock implementation of the `SourceProbe` trait.
///
/// Answers every check with HTTP 200 unless a status is scripted for the
/// URL, and records probed URLs for assertions.
///
/// # Example
///
/// ```rust,ignore
/// use officina_core::testing::MockProbe;
///
/// let probe = MockProbe::new();
/// probe.set_status("https://example.com/missing.docx", 404).await;
///
/// // Use with SourceResolver or SofficeConverter::with_parts...
///
/// assert_eq!(probe.check_count().await, 1);
/// ```
#[derive(Debug, Default)]
pub struct MockProbe {
    statuses: Arc<RwLock<HashMap<String, u16>>>,
    next_error: Arc<RwLock<Option<SourceError>>>,
    checked: Arc<RwLock<Vec<Url>>>,
}

impl MockProbe {
    /// Create a new mock probe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the probe status for a URL.
    pub async fn set_status(&self, url: &str, status: u16) {
        self.statuses.write().await.insert(url.to_string(), status);
    }

    /// Configure the next check to fail with the given error.
    pub async fn set_next_error(&self, error: SourceError) {
        *self.next_error.write().await = Some(error);
    }

    /// URLs probed so far.
    pub async fn checked_urls(&self) -> Vec<Url> {
        self.checked.read().await.clone()
    }

    /// Number of probes performed.
    pub async fn check_count(&self) -> usize {
        self.checked.read().await.len()
    }
}

#[async_trait]
impl SourceProbe for MockProbe {
    async fn check(&self, url: &Url) -> Result<(), SourceError> {
        self.checked.write().await.push(url.clone());

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        let status = self
            .statuses
            .read()
            .await
            .get(url.as_str())
            .copied()
            .unwrap_or(200);

        if (200..400).contains(&status) {
            Ok(())
        } else {
            Err(SourceError::Unreachable {
                url: url.to_string(),
                status,
            })
        }
    }
}
