// src/error.rs
//! Per-feed error taxonomy. Both variants are recoverable: the aggregator
//! logs them and skips the feed, they never cross the pipeline boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport failure: timeout, refused connection, or a non-2xx status.
    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    /// Body was not a recognizable RSS document (malformed XML or no items).
    #[error("parse error for {feed}: {reason}")]
    Parse { feed: String, reason: String },
}

impl FeedError {
    pub fn network(url: impl Into<String>, reason: impl ToString) -> Self {
        FeedError::Network {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(feed: impl Into<String>, reason: impl ToString) -> Self {
        FeedError::Parse {
            feed: feed.into(),
            reason: reason.to_string(),
        }
    }
}
