// src/feed.rs
//! RSS parsing. Providers disagree on element names, so each logical field
//! is resolved by trying known element paths in priority order instead of
//! per-provider branches. Missing fields become empty strings; only a
//! malformed document or one without `item` elements is an error.

use quick_xml::de::from_str;
use serde::Deserialize;

use crate::article::normalize_text;
use crate::dates::parse_timestamp;
use crate::error::FeedError;

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    title: Option<String>,
    #[serde(rename = "item", default)]
    items: Vec<Item>,
}

/// `<source url="...">Name</source>` carries its value as text content.
#[derive(Debug, Deserialize)]
struct SourceField {
    #[serde(rename = "$text")]
    name: Option<String>,
}

/// quick-xml's serde deserializer strips namespace prefixes, so the
/// namespaced element paths are matched by their local names: `dc:date`
/// arrives as `date`, `content:encoded` as `encoded`, and
/// `media:description` folds into `description`.
#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    date: Option<String>,
    description: Option<String>,
    encoded: Option<String>,
    source: Option<SourceField>,
}

impl Item {
    /// Date paths in priority order: `pubDate`, then `dc:date`.
    fn date(&self) -> &str {
        self.pub_date
            .as_deref()
            .or(self.date.as_deref())
            .unwrap_or_default()
    }

    /// Description paths in priority order: `description` (also covering
    /// `media:description`), then `content:encoded`.
    fn description(&self) -> &str {
        self.description
            .as_deref()
            .or(self.encoded.as_deref())
            .unwrap_or_default()
    }
}

/// One loosely-typed entry as read from a feed. All fields may still carry
/// markup; cleanup happens during enrichment.
#[derive(Debug, Clone)]
pub struct RawItem {
    pub title: String,
    pub link: String,
    pub source: String,
    /// Unix seconds, `None` when the feed date was absent or unparseable.
    pub published: Option<i64>,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ParsedFeed {
    pub source: String,
    pub items: Vec<RawItem>,
}

#[derive(Debug, Clone)]
pub struct FeedParser {
    max_items: usize,
    recency_secs: i64,
}

impl FeedParser {
    pub fn new(max_items: usize, recency_hours: i64) -> Self {
        Self {
            max_items,
            recency_secs: recency_hours * 3600,
        }
    }

    /// Parse one feed body. `feed_label` is the configured publisher name,
    /// used when neither the item nor the channel names a source. Items
    /// older than the recency window are dropped; items whose date cannot
    /// be parsed are kept (fail-open). At most `max_items` candidates are
    /// inspected to bound work on very large feeds.
    pub fn parse(&self, feed_label: &str, xml: &str, now_unix: i64) -> Result<ParsedFeed, FeedError> {
        let xml_clean = scrub_html_entities_for_xml(xml);
        let rss: Rss = from_str(&xml_clean)
            .map_err(|e| FeedError::parse(feed_label, format!("invalid feed xml: {e}")))?;

        if rss.channel.items.is_empty() {
            return Err(FeedError::parse(feed_label, "no item elements in feed"));
        }

        let channel_source = rss
            .channel
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(feed_label)
            .to_string();

        let mut items = Vec::new();
        for it in rss.channel.items.into_iter().take(self.max_items) {
            let title = it.title.as_deref().unwrap_or_default().trim().to_string();
            // check emptiness on the cleaned form: a markup-only title
            // would otherwise survive here and empty out during enrichment
            if normalize_text(&title).is_empty() {
                continue;
            }

            let published = parse_timestamp(it.date());
            if let Some(ts) = published {
                if now_unix - ts > self.recency_secs {
                    continue;
                }
            }

            let source = it
                .source
                .as_ref()
                .and_then(|s| s.name.as_deref())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(&channel_source)
                .to_string();

            items.push(RawItem {
                title,
                link: it.link.as_deref().unwrap_or_default().trim().to_string(),
                source,
                published,
                description: it.description().to_string(),
            });
        }

        Ok(ParsedFeed {
            source: channel_source,
            items,
        })
    }
}

/// Some providers leave HTML entities in the XML body; they are not valid
/// XML entities and break deserialization.
fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}
