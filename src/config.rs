// src/config.rs
//! Pipeline configuration. Loaded once and passed into component
//! constructors as an immutable value. Nothing reads ambient globals.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "BRIEFING_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/briefing.toml";

pub const DEFAULT_MAX_ARTICLES: usize = 6;
pub const DEFAULT_MAX_ITEMS_PER_FEED: usize = 20;
pub const DEFAULT_RECENCY_HOURS: i64 = 48;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_USER_AGENT: &str = "morning-briefing/0.1 (+daily refresh job)";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeedConfig {
    /// Publisher label used when the feed itself carries no usable name.
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BriefingConfig {
    #[serde(default = "default_feeds")]
    pub feeds: Vec<FeedConfig>,
    #[serde(default = "default_max_articles")]
    pub max_articles: usize,
    #[serde(default = "default_max_items_per_feed")]
    pub max_items_per_feed: usize,
    #[serde(default = "default_recency_hours")]
    pub recency_hours: i64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_max_articles() -> usize {
    DEFAULT_MAX_ARTICLES
}
fn default_max_items_per_feed() -> usize {
    DEFAULT_MAX_ITEMS_PER_FEED
}
fn default_recency_hours() -> i64 {
    DEFAULT_RECENCY_HOURS
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_feeds() -> Vec<FeedConfig> {
    vec![
        FeedConfig {
            name: "TechCrunch".into(),
            url: "https://techcrunch.com/category/artificial-intelligence/feed/".into(),
        },
        FeedConfig {
            name: "The Verge".into(),
            url: "https://www.theverge.com/rss/index.xml".into(),
        },
        FeedConfig {
            name: "Google News".into(),
            url: "https://news.google.com/rss/search?q=AI+artificial+intelligence&hl=en-US&gl=US&ceid=US:en".into(),
        },
    ]
}

impl Default for BriefingConfig {
    fn default() -> Self {
        Self {
            feeds: default_feeds(),
            max_articles: DEFAULT_MAX_ARTICLES,
            max_items_per_feed: DEFAULT_MAX_ITEMS_PER_FEED,
            recency_hours: DEFAULT_RECENCY_HOURS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl BriefingConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing briefing config TOML")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading briefing config from {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Resolution order:
    /// 1) $BRIEFING_CONFIG_PATH
    /// 2) config/briefing.toml
    /// 3) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            return Self::from_path(&pb);
        }
        let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
        if default_p.exists() {
            return Self::from_path(&default_p);
        }
        Ok(Self::default())
    }
}
