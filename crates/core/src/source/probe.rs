//! Reachability probing for remote sources.

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

use super::error::SourceError;

/// Checks that a remote source exists before a conversion is attempted.
#[async_trait]
pub trait SourceProbe: Send + Sync {
    /// Verifies the URL answers, without fetching its body.
    async fn check(&self, url: &Url) -> Result<(), SourceError>;
}

/// Probe backed by an HTTP HEAD request.
///
/// Any final 2xx or 3xx status counts as reachable.
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Creates a probe with the given request timeout.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl SourceProbe for HttpProbe {
    async fn check(&self, url: &Url) -> Result<(), SourceError> {
        debug!(url = %url, "Probing source URL");

        let response = self.client.head(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::probe_failed(url, "request timed out")
            } else if e.is_connect() {
                SourceError::probe_failed(url, format!("connection failed: {}", e))
            } else {
                SourceError::probe_failed(url, e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() || status.is_redirection() {
            Ok(())
        } else {
            Err(SourceError::Unreachable {
                url: url.to_string(),
                status: status.as_u16(),
            })
        }
    }
}
