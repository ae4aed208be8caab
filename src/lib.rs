// src/lib.rs
// Public library surface for the briefing pipeline and its tests.

pub mod article;
pub mod classify;
pub mod config;
pub mod dates;
pub mod dedup;
pub mod error;
pub mod fallback;
pub mod feed;
pub mod fetch;
pub mod pipeline;
pub mod summary;

// ---- Re-exports for the common entry points ----
pub use crate::article::{Article, Category};
pub use crate::config::BriefingConfig;
pub use crate::error::FeedError;
pub use crate::fetch::{FeedSource, HttpFeedSource};
pub use crate::pipeline::Pipeline;
