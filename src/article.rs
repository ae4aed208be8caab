// src/article.rs
//! The `Article` record handed to downstream renderers, plus the title/text
//! normalization helpers shared by the pipeline.

use serde::{Deserialize, Serialize};

/// Maximum title length in the output artifact; longer titles get an ellipsis.
pub const MAX_TITLE_LEN: usize = 80;

/// Sentinel link used when a feed item carries no URL.
pub const PLACEHOLDER_URL: &str = "#";

/// Fixed topic labels. `Technology` is the classifier default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Hardware,
    Policy,
    Business,
    Research,
    Security,
    #[serde(rename = "AI")]
    Ai,
    Technology,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hardware => "Hardware",
            Category::Policy => "Policy",
            Category::Business => "Business",
            Category::Research => "Research",
            Category::Security => "Security",
            Category::Ai => "AI",
            Category::Technology => "Technology",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One briefing entry. Field order is the externally consumed schema:
/// `title, category, summary, impact, source, time, url`. Element 0 of
/// the serialized array is the hero article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub category: Category,
    pub summary: String,
    pub impact: String,
    pub source: String,
    /// Relative-age bucket ("12 min ago", "Yesterday"), never a raw timestamp.
    pub time: String,
    pub url: String,
}

/// Strip markup and collapse whitespace: HTML entity decode, tag removal,
/// whitespace collapse, trim.
pub fn normalize_text(s: &str) -> String {
    let mut out = html_escape::decode_html_entities(s).to_string();

    static RE_TAGS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = re_tags.replace_all(&out, " ").to_string();

    static RE_WS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();
    out.trim().to_string()
}

/// Normalize a feed title and cap it at [`MAX_TITLE_LEN`] chars, appending
/// `...` when truncated.
pub fn clean_title(raw: &str) -> String {
    let t = normalize_text(raw);
    if t.chars().count() > MAX_TITLE_LEN {
        let mut cut: String = t.chars().take(MAX_TITLE_LEN).collect();
        cut = cut.trim_end().to_string();
        cut.push_str("...");
        cut
    } else {
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_strips_tags_and_entities() {
        let s = "  <b>Hello&nbsp;&nbsp;world</b> &amp; friends ";
        assert_eq!(normalize_text(s), "Hello world & friends");
    }

    #[test]
    fn clean_title_truncates_with_ellipsis() {
        let long = "a".repeat(120);
        let out = clean_title(&long);
        assert_eq!(out.chars().count(), MAX_TITLE_LEN + 3);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn short_titles_pass_through() {
        assert_eq!(clean_title("AI is growing"), "AI is growing");
    }

    #[test]
    fn category_serializes_as_label() {
        let v = serde_json::to_value(Category::Ai).unwrap();
        assert_eq!(v, serde_json::json!("AI"));
        let v = serde_json::to_value(Category::Hardware).unwrap();
        assert_eq!(v, serde_json::json!("Hardware"));
    }

    #[test]
    fn article_field_order_is_stable() {
        let a = Article {
            title: "T".into(),
            category: Category::Technology,
            summary: "S".into(),
            impact: "I".into(),
            source: "Src".into(),
            time: "Just now".into(),
            url: "#".into(),
        };
        let json = serde_json::to_string(&a).unwrap();
        let order = [
            "\"title\"",
            "\"category\"",
            "\"summary\"",
            "\"impact\"",
            "\"source\"",
            "\"time\"",
            "\"url\"",
        ];
        let mut last = 0;
        for key in order {
            let pos = json.find(key).expect("key present");
            assert!(pos >= last, "field {key} out of order in {json}");
            last = pos;
        }
    }
}
