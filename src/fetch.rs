// src/fetch.rs
//! Feed transport. `FeedSource` is the seam the aggregator consumes, so
//! tests can swap HTTP for fixtures; `HttpFeedSource` is the production
//! implementation with a bounded per-request timeout.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

use crate::config::BriefingConfig;
use crate::error::FeedError;

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Configured publisher label, also the source-name fallback.
    fn label(&self) -> &str;

    /// Retrieve the raw feed body. A failure here skips this feed only.
    async fn fetch(&self) -> Result<String, FeedError>;
}

/// Build the shared HTTP client: one per run, fixed timeout, identifying
/// User-Agent, no pooling beyond a single round-trip per feed.
pub fn build_client(cfg: &BriefingConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(cfg.user_agent.clone())
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .build()
        .context("building http client")
}

pub struct HttpFeedSource {
    label: String,
    url: String,
    client: reqwest::Client,
}

impl HttpFeedSource {
    pub fn new(label: impl Into<String>, url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    fn label(&self) -> &str {
        &self.label
    }

    async fn fetch(&self) -> Result<String, FeedError> {
        let resp = self.client.get(&self.url).send().await.map_err(|e| {
            let reason = if e.is_timeout() {
                "request timeout".to_string()
            } else if e.is_connect() {
                format!("connection failed: {e}")
            } else {
                e.to_string()
            };
            FeedError::network(&self.url, reason)
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::network(&self.url, format!("http status {status}")));
        }

        resp.text()
            .await
            .map_err(|e| FeedError::network(&self.url, format!("reading body: {e}")))
    }
}
