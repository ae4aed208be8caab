// src/pipeline.rs
//! The aggregator: drives fetch and parse per feed with isolated failures,
//! enriches raw entries into Articles, deduplicates, truncates. Feeds are
//! visited strictly one after another; merge order is feed-list order plus
//! parse order, with no global re-sort (the hero article is simply the
//! first surviving entry).

use chrono::{Local, Utc};
use metrics::{counter, describe_counter, describe_gauge, gauge};
use once_cell::sync::OnceCell;
use rand::Rng;
use tracing::{info, warn};

use crate::article::{clean_title, Article, PLACEHOLDER_URL};
use crate::classify::Classifier;
use crate::config::BriefingConfig;
use crate::dates::{relative_age, UNPARSEABLE_BUCKET};
use crate::dedup::dedup_by_title;
use crate::fallback::fallback_articles;
use crate::feed::{FeedParser, RawItem};
use crate::fetch::FeedSource;
use crate::summary::SummaryGenerator;

/// One-time metrics registration.
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("briefing_items_total", "Raw items parsed from feeds.");
        describe_counter!("briefing_kept_total", "Articles kept after dedup + truncation.");
        describe_counter!("briefing_feed_errors_total", "Feeds skipped on fetch/parse errors.");
        describe_counter!("briefing_dedup_total", "Articles removed as duplicate titles.");
        describe_counter!("briefing_fallback_total", "Runs that served the fallback set.");
        describe_gauge!("briefing_last_run_ts", "Unix ts of the last pipeline run.");
    });
}

pub struct Pipeline {
    parser: FeedParser,
    classifier: Classifier,
    summaries: SummaryGenerator,
    max_articles: usize,
}

impl Pipeline {
    pub fn from_config(cfg: &BriefingConfig) -> Self {
        Self {
            parser: FeedParser::new(cfg.max_items_per_feed, cfg.recency_hours),
            classifier: Classifier::default(),
            summaries: SummaryGenerator::new(),
            max_articles: cfg.max_articles,
        }
    }

    pub fn new(
        parser: FeedParser,
        classifier: Classifier,
        summaries: SummaryGenerator,
        max_articles: usize,
    ) -> Self {
        Self {
            parser,
            classifier,
            summaries,
            max_articles,
        }
    }

    fn enrich<R: Rng>(&self, item: RawItem, now_unix: i64, rng: &mut R) -> Article {
        let title = clean_title(&item.title);
        let (category, impact) = self.classifier.classify(&title);
        let time = match item.published {
            Some(ts) => relative_age(now_unix, ts),
            None => UNPARSEABLE_BUCKET.to_string(),
        };
        let summary = self
            .summaries
            .generate(&title, category, &item.description, rng);
        let url = if item.link.is_empty() {
            PLACEHOLDER_URL.to_string()
        } else {
            item.link
        };
        Article {
            title,
            category,
            summary,
            impact: impact.to_string(),
            source: item.source,
            time,
            url,
        }
    }

    /// One aggregation pass. Per-feed errors are logged and skipped, never
    /// propagated; an entirely failed batch comes back empty so the caller
    /// can apply the fallback.
    pub async fn collect<R: Rng + Send>(
        &self,
        sources: &[Box<dyn FeedSource>],
        now_unix: i64,
        rng: &mut R,
    ) -> Vec<Article> {
        ensure_metrics_described();

        let mut merged: Vec<Article> = Vec::new();
        for source in sources {
            let body = match source.fetch().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(error = %e, feed = source.label(), "feed skipped");
                    counter!("briefing_feed_errors_total").increment(1);
                    continue;
                }
            };
            let parsed = match self.parser.parse(source.label(), &body, now_unix) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!(error = %e, feed = source.label(), "feed skipped");
                    counter!("briefing_feed_errors_total").increment(1);
                    continue;
                }
            };

            counter!("briefing_items_total").increment(parsed.items.len() as u64);
            for item in parsed.items {
                merged.push(self.enrich(item, now_unix, rng));
            }
        }

        let before = merged.len();
        let mut articles = dedup_by_title(merged);
        counter!("briefing_dedup_total").increment((before - articles.len()) as u64);
        articles.truncate(self.max_articles);

        counter!("briefing_kept_total").increment(articles.len() as u64);
        gauge!("briefing_last_run_ts").set(now_unix as f64);
        articles
    }

    /// Full run with the fallback contract: all-real or all-fallback,
    /// never a mix. The result is always non-empty.
    pub async fn run<R: Rng + Send>(
        &self,
        sources: &[Box<dyn FeedSource>],
        rng: &mut R,
    ) -> Vec<Article> {
        let now_unix = Utc::now().timestamp();
        let articles = self.collect(sources, now_unix, rng).await;
        if articles.is_empty() {
            warn!("no usable items from any feed, serving fallback set");
            counter!("briefing_fallback_total").increment(1);
            return fallback_articles(Local::now());
        }
        info!(count = articles.len(), "briefing assembled");
        articles
    }
}
